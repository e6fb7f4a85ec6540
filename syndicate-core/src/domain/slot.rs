use crate::domain::Role;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One in-game deployment of a role. A roster may hold any number of
/// slots of the same role.
///
/// `night_actions` keeps one entry per tracked night: the empty string
/// means "no action recorded", anything else is a player id rendered
/// to string. The roster keeps every slot's vector sized to the
/// current night count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleSlot {
    id: Uuid,
    role: Role,
    assigned_player_id: Option<Uuid>,
    night_actions: Vec<String>,
    is_alive: bool,
}

impl RoleSlot {
    pub(crate) fn new(role: Role, night_count: usize) -> Self {
        RoleSlot {
            id: Uuid::new_v4(),
            role,
            assigned_player_id: None,
            night_actions: vec![String::new(); night_count],
            is_alive: true,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn assigned_player_id(&self) -> Option<Uuid> {
        self.assigned_player_id
    }

    pub fn night_actions(&self) -> &[String] {
        &self.night_actions
    }

    /// Recorded action for one night, if in range and non-empty.
    pub fn action(&self, night_index: usize) -> Option<&str> {
        self.night_actions
            .get(night_index)
            .map(|a| a.as_str())
            .filter(|a| !a.is_empty())
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// True when removal would discard something: an assignment or any
    /// recorded night action. Drives the stronger confirmation prompt.
    pub fn holds_data(&self) -> bool {
        self.assigned_player_id.is_some() || self.night_actions.iter().any(|a| !a.is_empty())
    }

    // ===== Mutations (crate-internal; the roster is the only caller) =====

    pub(crate) fn set_assignment(&mut self, player_id: Option<Uuid>) {
        self.assigned_player_id = player_id;
    }

    pub(crate) fn set_action(&mut self, night_index: usize, action: &str) {
        if let Some(entry) = self.night_actions.get_mut(night_index) {
            entry.clear();
            entry.push_str(action);
        }
    }

    pub(crate) fn push_empty_night(&mut self) {
        self.night_actions.push(String::new());
    }

    pub(crate) fn toggle_alive(&mut self) {
        self.is_alive = !self.is_alive;
    }

    /// Back to the freshly-deployed state: vacant, no actions, alive.
    pub(crate) fn reset(&mut self) {
        self.assigned_player_id = None;
        for action in &mut self.night_actions {
            action.clear();
        }
        self.is_alive = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_slot() {
        let slot = RoleSlot::new(Role::Doctor, 3);
        assert_eq!(slot.role(), Role::Doctor);
        assert_eq!(slot.assigned_player_id(), None);
        assert_eq!(slot.night_actions().len(), 3);
        assert!(slot.night_actions().iter().all(|a| a.is_empty()));
        assert!(slot.is_alive());
        assert!(!slot.holds_data());
    }

    #[test]
    fn test_holds_data_after_assignment() {
        let mut slot = RoleSlot::new(Role::Mafia, 2);
        slot.set_assignment(Some(Uuid::new_v4()));
        assert!(slot.holds_data());
    }

    #[test]
    fn test_holds_data_after_action() {
        let mut slot = RoleSlot::new(Role::Mafia, 2);
        slot.set_action(1, &Uuid::new_v4().to_string());
        assert!(slot.holds_data());
        assert!(slot.action(1).is_some());
        assert!(slot.action(0).is_none());
    }

    #[test]
    fn test_set_action_out_of_range_is_ignored() {
        let mut slot = RoleSlot::new(Role::Police, 2);
        slot.set_action(5, "anything");
        assert_eq!(slot.night_actions().len(), 2);
        assert!(!slot.holds_data());
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut slot = RoleSlot::new(Role::Citizen, 2);
        slot.set_assignment(Some(Uuid::new_v4()));
        slot.set_action(0, &Uuid::new_v4().to_string());
        slot.toggle_alive();

        slot.reset();

        assert_eq!(slot.assigned_player_id(), None);
        assert!(slot.night_actions().iter().all(|a| a.is_empty()));
        assert!(slot.is_alive());
        assert_eq!(slot.night_actions().len(), 2);
    }
}
