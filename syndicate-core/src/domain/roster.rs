use crate::domain::{GameSnapshot, Player, Role, RoleSlot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on tracked night cycles.
pub const MAX_NIGHTS: usize = 10;

const DEFAULT_NIGHTS: usize = 2;

/// The in-memory session state: players, role slots and the night
/// count. One instance per moderator session, explicitly owned by the
/// view layer — no globals.
///
/// Every operation is total: unknown ids and out-of-range indices are
/// ignored rather than surfaced as errors, so the view layer never has
/// a failure path to render. Destructive-operation confirmation is a
/// presentation concern; the operations here apply unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GameRoster {
    players: Vec<Player>,
    slots: Vec<RoleSlot>,
    night_count: usize,
}

impl Default for GameRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRoster {
    /// Fresh roster with the four default deployments at two nights.
    pub fn new() -> Self {
        Self::with_nights(DEFAULT_NIGHTS)
    }

    /// Fresh roster with the default deployments and a chosen night
    /// count (clamped to 1..=MAX_NIGHTS).
    pub fn with_nights(nights: usize) -> Self {
        let night_count = nights.clamp(1, MAX_NIGHTS);
        GameRoster {
            players: Vec::new(),
            slots: Role::DEFAULT_DEPLOYMENT
                .iter()
                .map(|&role| RoleSlot::new(role, night_count))
                .collect(),
            night_count,
        }
    }

    /// Empty roster, no default slots. Mostly for tests.
    pub fn empty() -> Self {
        GameRoster {
            players: Vec::new(),
            slots: Vec::new(),
            night_count: DEFAULT_NIGHTS,
        }
    }

    // ===== Getters =====

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn slots(&self) -> &[RoleSlot] {
        &self.slots
    }

    pub fn night_count(&self) -> usize {
        self.night_count
    }

    pub fn player(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn player_name(&self, id: Uuid) -> Option<&str> {
        self.player(id).map(|p| p.name())
    }

    /// Resolve a night-action entry (a stringified player id) to a
    /// display name. Dangling or malformed entries resolve to None.
    pub fn player_name_for_action(&self, action: &str) -> Option<&str> {
        let id = Uuid::parse_str(action).ok()?;
        self.player_name(id)
    }

    pub fn slot(&self, id: Uuid) -> Option<&RoleSlot> {
        self.slots.iter().find(|s| s.id() == id)
    }

    // ===== Player management =====

    /// Register a player. The name is trimmed; an empty result is a
    /// no-op. Duplicate names are allowed.
    pub fn add_player(&mut self, name: &str) -> Option<Uuid> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring add_player with blank name");
            return None;
        }

        let player = Player::new(trimmed.to_string());
        let id = player.id();
        tracing::info!(player = %trimmed, %id, "player registered");
        self.players.push(player);
        Some(id)
    }

    /// Remove a player by id. Deliberately does NOT cascade: slots
    /// keep any reference to the removed id, and views render the
    /// dangling assignment as unknown.
    pub fn remove_player(&mut self, id: Uuid) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id() != id);
        let removed = self.players.len() < before;
        if removed {
            tracing::info!(%id, "player removed");
        } else {
            tracing::debug!(%id, "ignoring remove_player for unknown id");
        }
        removed
    }

    /// True iff some slot's primary assignment points at this player.
    pub fn is_player_deployed(&self, player_id: Uuid) -> bool {
        self.slots
            .iter()
            .any(|s| s.assigned_player_id() == Some(player_id))
    }

    /// True iff some slot other than `excluding_slot_id` has this
    /// player as its primary assignment. The assignment picker uses
    /// this to flag and skip taken players; the store itself never
    /// enforces exclusivity.
    pub fn is_player_assigned_elsewhere(&self, player_id: Uuid, excluding_slot_id: Uuid) -> bool {
        self.slots
            .iter()
            .any(|s| s.id() != excluding_slot_id && s.assigned_player_id() == Some(player_id))
    }

    // ===== Slot management =====

    /// Deploy a role from the catalog: vacant assignment, empty
    /// actions sized to the current night count, alive.
    pub fn add_slot(&mut self, role: Role) -> Uuid {
        let slot = RoleSlot::new(role, self.night_count);
        let id = slot.id();
        tracing::info!(%role, %id, "role slot deployed");
        self.slots.push(slot);
        id
    }

    /// Remove a slot unconditionally. The caller is expected to have
    /// confirmed when `slot_holds_data` is true.
    pub fn remove_slot(&mut self, id: Uuid) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id() != id);
        let removed = self.slots.len() < before;
        if removed {
            tracing::info!(%id, "role slot removed");
        } else {
            tracing::debug!(%id, "ignoring remove_slot for unknown id");
        }
        removed
    }

    /// Whether removing this slot would discard an assignment or any
    /// recorded action. Unknown ids count as empty.
    pub fn slot_holds_data(&self, id: Uuid) -> bool {
        self.slot(id).map(RoleSlot::holds_data).unwrap_or(false)
    }

    /// Point a slot's primary assignment at a player, or clear it with
    /// None. Unconditional — exclusivity lives in the picker.
    pub fn assign_player(&mut self, slot_id: Uuid, player_id: Option<Uuid>) {
        match self.slots.iter_mut().find(|s| s.id() == slot_id) {
            Some(slot) => slot.set_assignment(player_id),
            None => tracing::debug!(%slot_id, "ignoring assign_player for unknown slot"),
        }
    }

    /// Record (or clear, with "") a slot's target for one night. The
    /// same player may be the target of any number of slots.
    pub fn record_night_action(&mut self, slot_id: Uuid, night_index: usize, action: &str) {
        if night_index >= self.night_count {
            tracing::debug!(night_index, "ignoring night action beyond night count");
            return;
        }
        match self.slots.iter_mut().find(|s| s.id() == slot_id) {
            Some(slot) => slot.set_action(night_index, action),
            None => tracing::debug!(%slot_id, "ignoring night action for unknown slot"),
        }
    }

    pub fn toggle_alive(&mut self, slot_id: Uuid) {
        match self.slots.iter_mut().find(|s| s.id() == slot_id) {
            Some(slot) => slot.toggle_alive(),
            None => tracing::debug!(%slot_id, "ignoring toggle_alive for unknown slot"),
        }
    }

    // ===== Night management =====

    /// Track one more night, up to MAX_NIGHTS. Every slot grows one
    /// empty action entry so lengths stay in sync. Returns false at
    /// the cap (and resizes nothing). There is no shrink operation.
    pub fn extend_night_count(&mut self) -> bool {
        if self.night_count >= MAX_NIGHTS {
            tracing::debug!("night count already at cap");
            return false;
        }
        self.night_count += 1;
        for slot in &mut self.slots {
            slot.push_empty_night();
        }
        tracing::info!(night_count = self.night_count, "night count extended");
        true
    }

    /// Clear one night's column across every slot; other entries are
    /// untouched. Out-of-range index is a no-op.
    pub fn clear_night_column(&mut self, night_index: usize) {
        if night_index >= self.night_count {
            tracing::debug!(night_index, "ignoring clear for unknown night column");
            return;
        }
        for slot in &mut self.slots {
            slot.set_action(night_index, "");
        }
        tracing::info!(night = night_index + 1, "night column cleared");
    }

    /// Full reset: every slot back to vacant/empty/alive. Players are
    /// untouched.
    pub fn clear_all_assignments(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
        tracing::info!("all assignments cleared");
    }

    // ===== Derived views =====

    /// Slots ordered by ascending catalog priority. Stable: slots with
    /// equal priority keep insertion order. Recomputed from scratch on
    /// every call.
    pub fn sorted_slots(&self) -> Vec<&RoleSlot> {
        let mut sorted: Vec<&RoleSlot> = self.slots.iter().collect();
        sorted.sort_by_key(|s| s.role().priority());
        sorted
    }

    /// Read-only snapshot for the narrative advisor.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            slots: self.slots.clone(),
            night_count: self.night_count,
        }
    }
}
