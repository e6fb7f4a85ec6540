use crossterm::event::KeyCode;
use syndicate_core::GameRoster;
use uuid::Uuid;

mod advisor_tab;
mod events_tab;
mod players_tab;
mod role_bank_tab;
mod roster_tab;

pub use advisor_tab::{AdvisorStatus, AdvisorTab};
pub use events_tab::EventsTab;
pub use players_tab::PlayersTab;
pub use role_bank_tab::RoleBankTab;
pub use roster_tab::{RosterOutcome, RosterTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roster,
    Players,
    RoleBank,
    Advisor,
    Events,
    Help,
}

impl Tab {
    pub fn next(&self) -> Self {
        match self {
            Tab::Roster => Tab::Players,
            Tab::Players => Tab::RoleBank,
            Tab::RoleBank => Tab::Advisor,
            Tab::Advisor => Tab::Events,
            Tab::Events => Tab::Help,
            Tab::Help => Tab::Roster,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Roster => Tab::Help,
            Tab::Players => Tab::Roster,
            Tab::RoleBank => Tab::Players,
            Tab::Advisor => Tab::RoleBank,
            Tab::Events => Tab::Advisor,
            Tab::Help => Tab::Events,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Roster => "Roster",
            Tab::Players => "Players",
            Tab::RoleBank => "Role Bank",
            Tab::Advisor => "Advisor",
            Tab::Events => "Events",
            Tab::Help => "Help",
        }
    }
}

/// User actions the outer loop must coordinate
#[derive(Debug, Clone)]
pub enum UserAction {
    Analyze,
    Quit,
}

/// Destructive mutation awaiting a `y` keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveSlot(Uuid),
    ClearNight(usize),
    ResetAll,
}

impl ConfirmAction {
    pub fn prompt(&self, roster: &GameRoster) -> String {
        match self {
            ConfirmAction::RemoveSlot(slot_id) => {
                let role = roster
                    .slot(*slot_id)
                    .map(|s| s.role().to_string())
                    .unwrap_or_else(|| "slot".to_string());
                if roster.slot_holds_data(*slot_id) {
                    format!("Slot contains data. PERMANENTLY delete {}?", role)
                } else {
                    format!("Remove {} slot?", role)
                }
            }
            ConfirmAction::ClearNight(night_index) => {
                format!("Clear all actions for Night {}?", night_index + 1)
            }
            ConfirmAction::ResetAll => {
                "RESET: Clear all assignments, night actions, and revive all players?".to_string()
            }
        }
    }
}

/// What a roster cell picker writes back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Assignment,
    Night(usize),
}

#[derive(Debug, Clone)]
pub struct PickerOption {
    pub player_id: Option<Uuid>,
    pub label: String,
    pub taken: bool,
}

/// Popup listing players for a roster cell
#[derive(Debug, Clone)]
pub struct PlayerPicker {
    pub slot_id: Uuid,
    pub target: PickerTarget,
    pub options: Vec<PickerOption>,
    pub selected: usize,
}

impl PlayerPicker {
    pub fn new(roster: &GameRoster, slot_id: Uuid, target: PickerTarget) -> Self {
        let clear_label = match target {
            PickerTarget::Assignment => "- VACANT -",
            PickerTarget::Night(_) => "- (no action) -",
        };

        let mut options = vec![PickerOption {
            player_id: None,
            label: clear_label.to_string(),
            taken: false,
        }];

        for player in roster.players() {
            let taken = target == PickerTarget::Assignment
                && roster.is_player_assigned_elsewhere(player.id(), slot_id);
            options.push(PickerOption {
                player_id: Some(player.id()),
                label: player.name().to_string(),
                taken,
            });
        }

        Self {
            slot_id,
            target,
            options,
            selected: 0,
        }
    }

    pub fn move_down(&mut self) {
        let max = self.options.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn title(&self) -> &str {
        match self.target {
            PickerTarget::Assignment => "Assign Player",
            PickerTarget::Night(_) => "Record Night Action",
        }
    }
}

/// Presentation state; owns the roster for the session
pub struct App {
    pub roster: GameRoster,
    pub current_tab: Tab,

    pub roster_tab: RosterTab,
    pub players_tab: PlayersTab,
    pub role_bank_tab: RoleBankTab,
    pub advisor_tab: AdvisorTab,
    pub events_tab: EventsTab,

    pub pending_confirm: Option<ConfirmAction>,
    pub picker: Option<PlayerPicker>,

    pub should_quit: bool,
}

impl App {
    pub fn new(roster: GameRoster) -> Self {
        Self {
            roster,
            current_tab: Tab::Roster,

            roster_tab: RosterTab::new(),
            players_tab: PlayersTab::new(),
            role_bank_tab: RoleBankTab::new(),
            advisor_tab: AdvisorTab::new(),
            events_tab: EventsTab::new(),

            pending_confirm: None,
            picker: None,

            should_quit: false,
        }
    }

    /// Handle keyboard input → returns UserAction if applicable
    pub fn handle_key(&mut self, key: KeyCode) -> Option<UserAction> {
        // Modal confirm eats everything: y applies, anything else cancels
        if self.pending_confirm.is_some() {
            match key {
                KeyCode::Char('y') => self.apply_confirm(),
                _ => {
                    self.pending_confirm = None;
                    self.log("Cancelled".to_string());
                }
            }
            return None;
        }

        // Picker overlay
        if self.picker.is_some() {
            match key {
                KeyCode::Char('j') | KeyCode::Down => {
                    if let Some(picker) = self.picker.as_mut() {
                        picker.move_down();
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    if let Some(picker) = self.picker.as_mut() {
                        picker.move_up();
                    }
                }
                KeyCode::Enter => self.apply_picker(),
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.picker = None;
                }
                _ => {}
            }
            return None;
        }

        // Global keys; plain letters stay available for typing on the Players tab
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
                return Some(UserAction::Quit);
            }

            KeyCode::Char('q') if self.current_tab != Tab::Players => {
                self.should_quit = true;
                return Some(UserAction::Quit);
            }

            KeyCode::Tab | KeyCode::Right => {
                self.current_tab = self.current_tab.next();
                return None;
            }

            KeyCode::BackTab | KeyCode::Left => {
                self.current_tab = self.current_tab.previous();
                return None;
            }

            _ => {}
        }

        // Tab-specific keys
        match self.current_tab {
            Tab::Roster => {
                let outcome = self.roster_tab.handle_key(key, &mut self.roster);
                self.handle_roster_outcome(outcome);
                None
            }
            Tab::Players => {
                if let Some(message) = self.players_tab.handle_key(key, &mut self.roster) {
                    self.log(message);
                }
                None
            }
            Tab::RoleBank => {
                if let Some(message) = self.role_bank_tab.handle_key(key, &mut self.roster) {
                    self.log(message);
                }
                None
            }
            Tab::Advisor => self.advisor_tab.handle_key(key),
            Tab::Events => {
                self.events_tab.handle_key(key);
                None
            }
            Tab::Help => None,
        }
    }

    fn handle_roster_outcome(&mut self, outcome: RosterOutcome) {
        match outcome {
            RosterOutcome::None => {}
            RosterOutcome::OpenPicker(slot_id, target) => {
                self.picker = Some(PlayerPicker::new(&self.roster, slot_id, target));
            }
            RosterOutcome::Confirm(action) => {
                self.pending_confirm = Some(action);
            }
            RosterOutcome::Log(message) => self.log(message),
        }
    }

    fn apply_confirm(&mut self) {
        if let Some(action) = self.pending_confirm.take() {
            match action {
                ConfirmAction::RemoveSlot(slot_id) => {
                    let role = self.roster.slot(slot_id).map(|s| s.role());
                    if self.roster.remove_slot(slot_id) {
                        if let Some(role) = role {
                            self.log(format!("Removed {} slot", role));
                        }
                        self.roster_tab.clamp(&self.roster);
                    }
                }
                ConfirmAction::ClearNight(night_index) => {
                    self.roster.clear_night_column(night_index);
                    self.log(format!("Cleared Night {}", night_index + 1));
                }
                ConfirmAction::ResetAll => {
                    self.roster.clear_all_assignments();
                    self.log("Roster reset".to_string());
                }
            }
        }
    }

    fn apply_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };

        let Some(option) = picker.options.get(picker.selected).cloned() else {
            return;
        };

        // Exclusivity is enforced here, not in the store
        if option.taken {
            self.picker = Some(picker);
            return;
        }

        match picker.target {
            PickerTarget::Assignment => {
                self.roster.assign_player(picker.slot_id, option.player_id);
                let message = match option.player_id.and_then(|id| self.roster.player_name(id)) {
                    Some(name) => format!("Assigned {}", name),
                    None => "Cleared assignment".to_string(),
                };
                self.log(message);
            }
            PickerTarget::Night(night_index) => {
                let action = option
                    .player_id
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                self.roster
                    .record_night_action(picker.slot_id, night_index, &action);
                self.log(format!("Updated Night {}", night_index + 1));
            }
        }
    }

    /// Add event to log (for display only)
    pub fn log(&mut self, event: String) {
        self.events_tab.add_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syndicate_core::Role;

    fn app_with_roster() -> App {
        let mut roster = GameRoster::new();
        roster.add_player("Alex");
        roster.add_player("Sam");
        App::new(roster)
    }

    #[test]
    fn test_tab_cycle_wraps_both_ways() {
        let mut tab = Tab::Roster;
        for _ in 0..6 {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Roster);

        let mut tab = Tab::Roster;
        for _ in 0..6 {
            tab = tab.previous();
        }
        assert_eq!(tab, Tab::Roster);
    }

    #[test]
    fn test_tab_key_advances_tab() {
        let mut app = app_with_roster();
        assert_eq!(app.current_tab, Tab::Roster);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.current_tab, Tab::Players);
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.current_tab, Tab::Roster);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with_roster();
        assert!(matches!(
            app.handle_key(KeyCode::Char('q')),
            Some(UserAction::Quit)
        ));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_player_input() {
        let mut app = app_with_roster();
        app.current_tab = Tab::Players;
        assert!(app.handle_key(KeyCode::Char('q')).is_none());
        assert!(!app.should_quit);
        assert_eq!(app.players_tab.input(), "q");
    }

    #[test]
    fn test_cancelled_confirm_leaves_roster_unchanged() {
        let mut app = app_with_roster();
        let slot_id = app.roster.add_slot(Role::Doctor);
        app.pending_confirm = Some(ConfirmAction::RemoveSlot(slot_id));

        app.handle_key(KeyCode::Char('n'));

        assert!(app.pending_confirm.is_none());
        assert!(app.roster.slot(slot_id).is_some());
    }

    #[test]
    fn test_confirmed_remove_deletes_slot() {
        let mut app = app_with_roster();
        let slot_id = app.roster.add_slot(Role::Doctor);
        app.pending_confirm = Some(ConfirmAction::RemoveSlot(slot_id));

        app.handle_key(KeyCode::Char('y'));

        assert!(app.roster.slot(slot_id).is_none());
    }

    #[test]
    fn test_confirm_prompt_warns_when_slot_holds_data() {
        let mut app = app_with_roster();
        let slot_id = app.roster.add_slot(Role::Mafia);
        let empty_prompt = ConfirmAction::RemoveSlot(slot_id).prompt(&app.roster);
        assert_eq!(empty_prompt, "Remove Mafia slot?");

        let player_id = app.roster.players()[0].id();
        app.roster.assign_player(slot_id, Some(player_id));
        let loaded_prompt = ConfirmAction::RemoveSlot(slot_id).prompt(&app.roster);
        assert_eq!(loaded_prompt, "Slot contains data. PERMANENTLY delete Mafia?");
    }

    #[test]
    fn test_picker_flags_players_assigned_elsewhere() {
        let mut app = app_with_roster();
        let doctor = app.roster.add_slot(Role::Doctor);
        let mafia = app.roster.add_slot(Role::Mafia);
        let alex = app.roster.players()[0].id();
        app.roster.assign_player(doctor, Some(alex));

        let picker = PlayerPicker::new(&app.roster, mafia, PickerTarget::Assignment);
        let alex_option = picker
            .options
            .iter()
            .find(|o| o.player_id == Some(alex))
            .unwrap();
        assert!(alex_option.taken);

        // Night pickers never restrict
        let night_picker = PlayerPicker::new(&app.roster, mafia, PickerTarget::Night(0));
        assert!(night_picker.options.iter().all(|o| !o.taken));
    }

    #[test]
    fn test_picker_enter_on_taken_player_is_rejected() {
        let mut app = app_with_roster();
        let doctor = app.roster.add_slot(Role::Doctor);
        let mafia = app.roster.add_slot(Role::Mafia);
        let alex = app.roster.players()[0].id();
        app.roster.assign_player(doctor, Some(alex));

        let mut picker = PlayerPicker::new(&app.roster, mafia, PickerTarget::Assignment);
        picker.selected = picker
            .options
            .iter()
            .position(|o| o.player_id == Some(alex))
            .unwrap();
        app.picker = Some(picker);

        app.handle_key(KeyCode::Enter);

        // Picker stays open, slot stays vacant
        assert!(app.picker.is_some());
        assert_eq!(app.roster.slot(mafia).unwrap().assigned_player_id(), None);
    }

    #[test]
    fn test_picker_assigns_selected_player() {
        let mut app = app_with_roster();
        let doctor = app.roster.add_slot(Role::Doctor);
        let sam = app.roster.players()[1].id();

        let mut picker = PlayerPicker::new(&app.roster, doctor, PickerTarget::Assignment);
        picker.selected = picker
            .options
            .iter()
            .position(|o| o.player_id == Some(sam))
            .unwrap();
        app.picker = Some(picker);

        app.handle_key(KeyCode::Enter);

        assert!(app.picker.is_none());
        assert_eq!(
            app.roster.slot(doctor).unwrap().assigned_player_id(),
            Some(sam)
        );
    }

    #[test]
    fn test_picker_records_night_action_as_player_id() {
        let mut app = app_with_roster();
        let mafia = app.roster.add_slot(Role::Mafia);
        let alex = app.roster.players()[0].id();

        let mut picker = PlayerPicker::new(&app.roster, mafia, PickerTarget::Night(1));
        picker.selected = picker
            .options
            .iter()
            .position(|o| o.player_id == Some(alex))
            .unwrap();
        app.picker = Some(picker);

        app.handle_key(KeyCode::Enter);

        assert_eq!(
            app.roster.slot(mafia).unwrap().action(1),
            Some(alex.to_string().as_str())
        );
    }

    #[test]
    fn test_confirmed_reset_revives_and_clears() {
        let mut app = app_with_roster();
        let doctor = app.roster.add_slot(Role::Doctor);
        let alex = app.roster.players()[0].id();
        app.roster.assign_player(doctor, Some(alex));
        app.roster.toggle_alive(doctor);
        app.pending_confirm = Some(ConfirmAction::ResetAll);

        app.handle_key(KeyCode::Char('y'));

        let slot = app.roster.slot(doctor).unwrap();
        assert_eq!(slot.assigned_player_id(), None);
        assert!(slot.is_alive());
        assert_eq!(app.roster.players().len(), 2);
    }
}
