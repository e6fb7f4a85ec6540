use crossterm::event::KeyCode;
use syndicate_core::{GameRoster, MAX_NIGHTS};
use uuid::Uuid;

use crate::presentation::tui::app::{ConfirmAction, PickerTarget};

/// What a roster keystroke asks the app shell to do
pub enum RosterOutcome {
    None,
    OpenPicker(Uuid, PickerTarget),
    Confirm(ConfirmAction),
    Log(String),
}

/// Roster grid cursor (presentation only)
///
/// Column 0 is the assignment cell, columns 1..=night_count are nights.
pub struct RosterTab {
    selected_row: usize,
    selected_col: usize,
}

impl RosterTab {
    pub fn new() -> Self {
        Self {
            selected_row: 0,
            selected_col: 0,
        }
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn selected_col(&self) -> usize {
        self.selected_col
    }

    fn selected_slot_id(&self, roster: &GameRoster) -> Option<Uuid> {
        roster
            .sorted_slots()
            .get(self.selected_row)
            .map(|slot| slot.id())
    }

    /// Keep the cursor inside the grid after slots or nights change
    pub fn clamp(&mut self, roster: &GameRoster) {
        let max_row = roster.slots().len().saturating_sub(1);
        self.selected_row = self.selected_row.min(max_row);
        self.selected_col = self.selected_col.min(roster.night_count());
    }

    pub fn handle_key(&mut self, key: KeyCode, roster: &mut GameRoster) -> RosterOutcome {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = roster.slots().len().saturating_sub(1);
                self.selected_row = (self.selected_row + 1).min(max);
                RosterOutcome::None
            }

            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
                RosterOutcome::None
            }

            KeyCode::Char('l') => {
                self.selected_col = (self.selected_col + 1).min(roster.night_count());
                RosterOutcome::None
            }

            KeyCode::Char('h') => {
                self.selected_col = self.selected_col.saturating_sub(1);
                RosterOutcome::None
            }

            KeyCode::Enter => match self.selected_slot_id(roster) {
                Some(slot_id) => {
                    let target = if self.selected_col == 0 {
                        PickerTarget::Assignment
                    } else {
                        PickerTarget::Night(self.selected_col - 1)
                    };
                    RosterOutcome::OpenPicker(slot_id, target)
                }
                None => RosterOutcome::None,
            },

            KeyCode::Char('d') | KeyCode::Backspace | KeyCode::Delete => {
                match self.selected_slot_id(roster) {
                    Some(slot_id) => {
                        if self.selected_col == 0 {
                            roster.assign_player(slot_id, None);
                            RosterOutcome::Log("Cleared assignment".to_string())
                        } else {
                            roster.record_night_action(slot_id, self.selected_col - 1, "");
                            RosterOutcome::Log(format!("Cleared Night {} cell", self.selected_col))
                        }
                    }
                    None => RosterOutcome::None,
                }
            }

            KeyCode::Char('t') => match self.selected_slot_id(roster) {
                Some(slot_id) => {
                    roster.toggle_alive(slot_id);
                    match roster.slot(slot_id) {
                        Some(slot) => {
                            let status = if slot.is_alive() { "Alive" } else { "Dead" };
                            RosterOutcome::Log(format!("{} is now {}", slot.role(), status))
                        }
                        None => RosterOutcome::None,
                    }
                }
                None => RosterOutcome::None,
            },

            KeyCode::Char('x') => match self.selected_slot_id(roster) {
                Some(slot_id) => RosterOutcome::Confirm(ConfirmAction::RemoveSlot(slot_id)),
                None => RosterOutcome::None,
            },

            KeyCode::Char('n') => {
                if roster.extend_night_count() {
                    RosterOutcome::Log(format!("Night {} added", roster.night_count()))
                } else {
                    RosterOutcome::Log(format!("Night limit reached ({})", MAX_NIGHTS))
                }
            }

            KeyCode::Char('c') if self.selected_col >= 1 => {
                RosterOutcome::Confirm(ConfirmAction::ClearNight(self.selected_col - 1))
            }

            KeyCode::Char('R') => RosterOutcome::Confirm(ConfirmAction::ResetAll),

            _ => RosterOutcome::None,
        }
    }
}
