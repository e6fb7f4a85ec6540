//! End-to-end moderation scenarios over a full roster session.

use syndicate_core::{GameRoster, Role};
use uuid::Uuid;

fn slot_id(roster: &GameRoster, role: Role) -> Uuid {
    roster
        .slots()
        .iter()
        .find(|s| s.role() == role)
        .map(|s| s.id())
        .expect("default deployment should contain the role")
}

#[test]
fn assign_and_track_a_first_night() {
    // Fresh session: zero players, the four default deployments,
    // two nights tracked.
    let mut roster = GameRoster::new();
    assert_eq!(roster.night_count(), 2);
    assert!(roster.players().is_empty());
    assert_eq!(roster.slots().len(), 4);

    let alex = roster.add_player("Alex").expect("non-empty name");

    let doctor = slot_id(&roster, Role::Doctor);
    let mafia = slot_id(&roster, Role::Mafia);

    roster.assign_player(doctor, Some(alex));
    roster.record_night_action(mafia, 0, &alex.to_string());

    assert_eq!(roster.slot(doctor).unwrap().assigned_player_id(), Some(alex));
    assert_eq!(
        roster.slot(mafia).unwrap().night_actions()[0],
        alex.to_string()
    );

    // Alex holds the Doctor assignment, so from the Mafia slot's
    // point of view they are taken.
    assert!(roster.is_player_assigned_elsewhere(alex, mafia));
    assert!(!roster.is_player_assigned_elsewhere(alex, doctor));

    // Night-wake order: Police (2), Doctor (3), Mafia (4), Citizen (10).
    let order: Vec<Role> = roster.sorted_slots().iter().map(|s| s.role()).collect();
    assert_eq!(
        order,
        vec![Role::Police, Role::Doctor, Role::Mafia, Role::Citizen]
    );
}

#[test]
fn toggling_status_twice_is_identity() {
    let mut roster = GameRoster::new();
    let citizen = slot_id(&roster, Role::Citizen);
    let initial = roster.slot(citizen).unwrap().is_alive();

    roster.toggle_alive(citizen);
    roster.toggle_alive(citizen);

    assert_eq!(roster.slot(citizen).unwrap().is_alive(), initial);
}

#[test]
fn removing_an_assigned_player_leaves_a_ghost_reference() {
    let mut roster = GameRoster::new();
    let alex = roster.add_player("Alex").unwrap();
    let doctor = slot_id(&roster, Role::Doctor);
    roster.assign_player(doctor, Some(alex));

    roster.remove_player(alex);

    // Documented behavior: no cascade. The slot keeps the dangling id
    // and display falls back to an unknown-player rendering.
    assert!(roster.players().is_empty());
    assert_eq!(roster.slot(doctor).unwrap().assigned_player_id(), Some(alex));
    assert_eq!(roster.player_name(alex), None);
}

#[test]
fn full_session_reset_keeps_the_player_pool() {
    let mut roster = GameRoster::new();
    let alex = roster.add_player("Alex").unwrap();
    let blair = roster.add_player("Blair").unwrap();

    let mafia = slot_id(&roster, Role::Mafia);
    let police = slot_id(&roster, Role::Police);

    roster.assign_player(mafia, Some(alex));
    roster.assign_player(police, Some(blair));
    roster.extend_night_count();
    roster.record_night_action(mafia, 2, &blair.to_string());
    roster.toggle_alive(police);

    roster.clear_all_assignments();

    for slot in roster.slots() {
        assert_eq!(slot.assigned_player_id(), None);
        assert!(slot.night_actions().iter().all(|a| a.is_empty()));
        assert!(slot.is_alive());
        // Night count survives the reset.
        assert_eq!(slot.night_actions().len(), 3);
    }
    assert_eq!(roster.players().len(), 2);
    assert_eq!(roster.player_name(alex), Some("Alex"));
    assert_eq!(roster.player_name(blair), Some("Blair"));
}
