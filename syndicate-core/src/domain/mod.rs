pub mod catalog;
pub mod player;
pub mod roster;
pub mod slot;
pub mod snapshot;

pub use catalog::{Role, RoleCategory, RoleInfo};
pub use player::Player;
pub use roster::{GameRoster, MAX_NIGHTS};
pub use slot::RoleSlot;
pub use snapshot::GameSnapshot;
