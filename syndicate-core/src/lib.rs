pub mod domain;

pub use domain::{
    GameRoster, GameSnapshot, Player, Role, RoleCategory, RoleInfo, RoleSlot, MAX_NIGHTS,
};
