use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered player. Identity is the generated id; the display name
/// is free-form and deliberately allowed to collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    id: Uuid,
    name: String,
}

impl Player {
    /// Create a player from an already-trimmed, non-empty name.
    /// Trimming and the empty-name no-op live in the roster operation.
    pub(crate) fn new(name: String) -> Self {
        Player {
            id: Uuid::new_v4(),
            name,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let a = Player::new("Alex".to_string());
        let b = Player::new("Alex".to_string());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_serialization_round_trip() {
        let player = Player::new("Morgan".to_string());
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }
}
