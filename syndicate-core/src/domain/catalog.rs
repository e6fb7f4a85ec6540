use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alignment group a role belongs to. Affects grouping and badge
/// styling in the picker, never gameplay logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RoleCategory {
    Town,
    Mafia,
    Killer,
    Neutral,
    Shifter,
}

impl RoleCategory {
    /// Fixed presentation order for the grouped picker.
    pub const ALL: [RoleCategory; 5] = [
        RoleCategory::Town,
        RoleCategory::Mafia,
        RoleCategory::Killer,
        RoleCategory::Neutral,
        RoleCategory::Shifter,
    ];
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoleCategory::Town => "Town",
            RoleCategory::Mafia => "Mafia",
            RoleCategory::Killer => "Killer",
            RoleCategory::Neutral => "Neutral",
            RoleCategory::Shifter => "Shifter",
        };
        write!(f, "{}", name)
    }
}

/// The closed set of role archetypes a slot can deploy.
///
/// Declaration order doubles as catalog order: it decides the
/// within-category ordering of the grouped picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    Amnesiac,
    Police,
    Doctor,
    Mafia,
    SerialKiller,
    Arsonist,
    Survivor,
    Executioner,
    Jester,
    Citizen,
}

/// Static catalog metadata for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub category: RoleCategory,
    /// Night-wake display priority; lower wakes earlier.
    pub priority: u8,
    pub description: &'static str,
    pub ability: &'static str,
}

impl Role {
    /// Every role, in catalog declaration order.
    pub const ALL: [Role; 10] = [
        Role::Amnesiac,
        Role::Police,
        Role::Doctor,
        Role::Mafia,
        Role::SerialKiller,
        Role::Arsonist,
        Role::Survivor,
        Role::Executioner,
        Role::Jester,
        Role::Citizen,
    ];

    /// The four slots every fresh roster starts with.
    pub const DEFAULT_DEPLOYMENT: [Role; 4] =
        [Role::Mafia, Role::Police, Role::Doctor, Role::Citizen];

    pub fn info(&self) -> &'static RoleInfo {
        match self {
            Role::Amnesiac => &RoleInfo {
                category: RoleCategory::Shifter,
                priority: 1,
                description: "Remember a role from the graveyard and take its place.",
                ability: "Select a dead player to inherit their role and powers.",
            },
            Role::Police => &RoleInfo {
                category: RoleCategory::Town,
                priority: 2,
                description: "Find the threats to the town.",
                ability: "Investigate one player each night to see their alignment.",
            },
            Role::Doctor => &RoleInfo {
                category: RoleCategory::Town,
                priority: 3,
                description: "Keep the innocent alive.",
                ability: "Protect one player from being killed each night.",
            },
            Role::Mafia => &RoleInfo {
                category: RoleCategory::Mafia,
                priority: 4,
                description: "Eliminate all non-mafia players.",
                ability: "Vote to kill one person each night.",
            },
            Role::SerialKiller => &RoleInfo {
                category: RoleCategory::Killer,
                priority: 5,
                description: "Kill everyone and be the last one standing.",
                ability: "Select one player to kill every night. Immune to mafia attacks.",
            },
            Role::Arsonist => &RoleInfo {
                category: RoleCategory::Killer,
                priority: 6,
                description: "Douse everyone in gasoline and watch them burn.",
                ability: "Douse players on nights 1-3. On night 4+, ignite to kill all doused victims.",
            },
            Role::Survivor => &RoleInfo {
                category: RoleCategory::Neutral,
                priority: 7,
                description: "Stay alive until the end of the game, no matter who wins.",
                ability: "Has 2 bulletproof vests to survive night attacks.",
            },
            Role::Executioner => &RoleInfo {
                category: RoleCategory::Neutral,
                priority: 8,
                description: "Get your target executed during the day.",
                ability: "Assigned a target at start. If target is lynched, you win.",
            },
            Role::Jester => &RoleInfo {
                category: RoleCategory::Neutral,
                priority: 9,
                description: "Trick the town into executing you at the day vote.",
                ability: "Wins ONLY if executed by the town. Has no night abilities.",
            },
            Role::Citizen => &RoleInfo {
                category: RoleCategory::Town,
                priority: 10,
                description: "Find and vote out the mafia.",
                ability: "No night ability. Uses deduction during the day.",
            },
        }
    }

    pub fn category(&self) -> RoleCategory {
        self.info().category
    }

    pub fn priority(&self) -> u8 {
        self.info().priority
    }

    /// All ten roles partitioned into their five categories, categories
    /// in fixed order, roles within each group in catalog order.
    /// Recomputed on every call; the catalog is small enough that
    /// caching would only add state.
    pub fn grouped_by_category() -> Vec<(RoleCategory, Vec<Role>)> {
        RoleCategory::ALL
            .iter()
            .map(|&cat| {
                let roles = Role::ALL
                    .iter()
                    .copied()
                    .filter(|r| r.category() == cat)
                    .collect();
                (cat, roles)
            })
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Amnesiac => "Amnesiac",
            Role::Police => "Police",
            Role::Doctor => "Doctor",
            Role::Mafia => "Mafia",
            Role::SerialKiller => "Serial Killer",
            Role::Arsonist => "Arsonist",
            Role::Survivor => "Survivor",
            Role::Executioner => "Executioner",
            Role::Jester => "Jester",
            Role::Citizen => "Citizen",
        };
        write!(f, "{}", name)
    }
}
