use crossterm::event::KeyCode;
use syndicate_core::GameRoster;

/// Player pool tab state: a one-line name input plus list selection
pub struct PlayersTab {
    input: String,
    selected: usize,
}

impl PlayersTab {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            selected: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns an event-log message when a keystroke changed the pool
    pub fn handle_key(&mut self, key: KeyCode, roster: &mut GameRoster) -> Option<String> {
        match key {
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }

            KeyCode::Backspace => {
                self.input.pop();
                None
            }

            KeyCode::Enter => {
                let name = self.input.trim().to_string();
                self.input.clear();
                roster.add_player(&name).map(|_| format!("Recruited {}", name))
            }

            KeyCode::Down => {
                let max = roster.players().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(max);
                None
            }

            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }

            KeyCode::Delete => {
                let player = roster.players().get(self.selected)?;
                let (id, name) = (player.id(), player.name().to_string());

                // Matches the roster picker rule: deployed players stay put
                if roster.is_player_deployed(id) {
                    return Some(format!("{} is deployed and cannot be removed", name));
                }

                if roster.remove_player(id) {
                    let max = roster.players().len().saturating_sub(1);
                    self.selected = self.selected.min(max);
                    Some(format!("Removed {}", name))
                } else {
                    None
                }
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syndicate_core::Role;

    #[test]
    fn test_typed_name_is_recruited_on_enter() {
        let mut roster = GameRoster::empty();
        let mut tab = PlayersTab::new();

        for c in "Alex".chars() {
            tab.handle_key(KeyCode::Char(c), &mut roster);
        }
        let message = tab.handle_key(KeyCode::Enter, &mut roster);

        assert_eq!(message.as_deref(), Some("Recruited Alex"));
        assert_eq!(roster.players().len(), 1);
        assert_eq!(tab.input(), "");
    }

    #[test]
    fn test_blank_input_recruits_nobody() {
        let mut roster = GameRoster::empty();
        let mut tab = PlayersTab::new();

        tab.handle_key(KeyCode::Char(' '), &mut roster);
        let message = tab.handle_key(KeyCode::Enter, &mut roster);

        assert!(message.is_none());
        assert!(roster.players().is_empty());
    }

    #[test]
    fn test_deployed_player_cannot_be_removed() {
        let mut roster = GameRoster::empty();
        let id = roster.add_player("Sam").unwrap();
        let slot = roster.add_slot(Role::Doctor);
        roster.assign_player(slot, Some(id));

        let mut tab = PlayersTab::new();
        let message = tab.handle_key(KeyCode::Delete, &mut roster);

        assert_eq!(
            message.as_deref(),
            Some("Sam is deployed and cannot be removed")
        );
        assert_eq!(roster.players().len(), 1);
    }

    #[test]
    fn test_idle_player_is_removed() {
        let mut roster = GameRoster::empty();
        roster.add_player("Sam");

        let mut tab = PlayersTab::new();
        let message = tab.handle_key(KeyCode::Delete, &mut roster);

        assert_eq!(message.as_deref(), Some("Removed Sam"));
        assert!(roster.players().is_empty());
    }
}
