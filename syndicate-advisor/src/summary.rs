use serde::Serialize;
use syndicate_core::GameSnapshot;

/// Placeholder used when a slot is vacant or its assignment no longer
/// resolves to a registered player.
pub const UNASSIGNED: &str = "Unassigned";

/// One line of the per-slot summary embedded in the prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSummary {
    pub role: String,
    pub player: String,
    pub actions: Vec<String>,
    pub status: String,
}

/// Flatten a snapshot into the `{role, player, actions, status}`
/// records the service is asked to narrate. Dangling assignments fold
/// into the unassigned placeholder rather than leaking raw ids.
pub fn build_summary(snapshot: &GameSnapshot) -> Vec<SlotSummary> {
    snapshot
        .slots
        .iter()
        .map(|slot| {
            let player = slot
                .assigned_player_id()
                .and_then(|id| snapshot.player_name(id))
                .unwrap_or(UNASSIGNED)
                .to_string();
            SlotSummary {
                role: slot.role().to_string(),
                player,
                actions: slot.night_actions().to_vec(),
                status: if slot.is_alive() { "Alive" } else { "Dead" }.to_string(),
            }
        })
        .collect()
}

/// The narration request sent to the service, with the summary records
/// embedded as pretty-printed JSON.
pub fn build_prompt(snapshot: &GameSnapshot) -> String {
    let summary = build_summary(snapshot);
    let data = serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are a professional Mafia Game Narrator.\n\
         Analyze the current game state and provide a brief, dramatic summary of what's happening.\n\
         Identify potential threats or interesting conflicts based on night actions.\n\
         \n\
         Current Game Data:\n\
         {data}\n\
         \n\
         Provide 3 key insights or predictions for the next day/night cycle in a cool, mysterious tone."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use syndicate_core::{GameRoster, Role};
    use uuid::Uuid;

    #[test]
    fn test_summary_resolves_names_and_status() {
        let mut roster = GameRoster::new();
        let alex = roster.add_player("Alex").unwrap();
        let doctor = roster
            .slots()
            .iter()
            .find(|s| s.role() == Role::Doctor)
            .unwrap()
            .id();
        roster.assign_player(doctor, Some(alex));
        roster.toggle_alive(doctor);

        let summary = build_summary(&roster.snapshot());
        let doctor_line = summary.iter().find(|s| s.role == "Doctor").unwrap();

        assert_eq!(doctor_line.player, "Alex");
        assert_eq!(doctor_line.status, "Dead");
        assert_eq!(doctor_line.actions.len(), 2);
    }

    #[test]
    fn test_vacant_and_dangling_fold_to_unassigned() {
        let mut roster = GameRoster::new();
        let alex = roster.add_player("Alex").unwrap();
        let doctor = roster
            .slots()
            .iter()
            .find(|s| s.role() == Role::Doctor)
            .unwrap()
            .id();
        roster.assign_player(doctor, Some(alex));
        roster.remove_player(alex);

        let summary = build_summary(&roster.snapshot());
        assert!(summary.iter().all(|s| s.player == UNASSIGNED));
    }

    #[test]
    fn test_prompt_embeds_summary() {
        let mut roster = GameRoster::empty();
        roster.add_slot(Role::Jester);
        let prompt = build_prompt(&roster.snapshot());

        assert!(prompt.contains("Mafia Game Narrator"));
        assert!(prompt.contains("\"Jester\""));
        assert!(prompt.contains("3 key insights"));
    }

    #[test]
    fn test_summary_one_record_per_slot() {
        let mut roster = GameRoster::empty();
        roster.add_slot(Role::Mafia);
        roster.add_slot(Role::Mafia);
        let ghost_target = Uuid::new_v4().to_string();
        let id = roster.add_slot(Role::Arsonist);
        roster.record_night_action(id, 0, &ghost_target);

        let summary = build_summary(&roster.snapshot());
        assert_eq!(summary.len(), 3);
        // Night-action entries are carried verbatim, resolved or not.
        assert_eq!(summary[2].actions[0], ghost_target);
    }
}
