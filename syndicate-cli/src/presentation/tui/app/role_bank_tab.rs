use crossterm::event::KeyCode;
use syndicate_core::{GameRoster, Role};

/// Role bank tab state (presentation only)
pub struct RoleBankTab {
    selected: usize,
}

impl RoleBankTab {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Roles in display order: grouped by category, catalog order within
    pub fn display_order() -> Vec<Role> {
        Role::grouped_by_category()
            .into_iter()
            .flat_map(|(_, roles)| roles)
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyCode, roster: &mut GameRoster) -> Option<String> {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = Role::ALL.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(max);
                None
            }

            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }

            KeyCode::Enter => {
                let role = *Self::display_order().get(self.selected)?;
                roster.add_slot(role);
                Some(format!("Deployed {}", role))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_covers_the_whole_catalog() {
        let order = RoleBankTab::display_order();
        assert_eq!(order.len(), Role::ALL.len());
        for role in Role::ALL {
            assert!(order.contains(&role));
        }
    }

    #[test]
    fn test_enter_deploys_the_selected_role() {
        let mut roster = GameRoster::empty();
        let mut tab = RoleBankTab::new();
        tab.handle_key(KeyCode::Char('j'), &mut roster);

        let expected = RoleBankTab::display_order()[1];
        let message = tab.handle_key(KeyCode::Enter, &mut roster);

        assert_eq!(message, Some(format!("Deployed {}", expected)));
        assert_eq!(roster.slots().len(), 1);
        assert_eq!(roster.slots()[0].role(), expected);
    }

    #[test]
    fn test_selection_stops_at_the_last_role() {
        let mut roster = GameRoster::empty();
        let mut tab = RoleBankTab::new();
        for _ in 0..50 {
            tab.handle_key(KeyCode::Char('j'), &mut roster);
        }
        assert_eq!(tab.selected(), Role::ALL.len() - 1);
    }
}
