use crate::domain::{Player, RoleSlot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only copy of the roster handed to the narrative advisor.
/// Constructed on demand, never persisted, never versioned — edits
/// made after the snapshot is taken are invisible to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub slots: Vec<RoleSlot>,
    pub night_count: usize,
}

impl GameSnapshot {
    pub fn player_name(&self, id: Uuid) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.name())
    }
}
