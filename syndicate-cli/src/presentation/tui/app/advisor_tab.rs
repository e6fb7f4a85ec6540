use crossterm::event::KeyCode;

use crate::presentation::tui::app::UserAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorStatus {
    Idle,
    Pending,
    Ready(String),
}

/// Advisor tab state: latest narrative plus request status
pub struct AdvisorTab {
    status: AdvisorStatus,
}

impl AdvisorTab {
    pub fn new() -> Self {
        Self {
            status: AdvisorStatus::Idle,
        }
    }

    pub fn status(&self) -> &AdvisorStatus {
        &self.status
    }

    pub fn set_pending(&mut self) {
        self.status = AdvisorStatus::Pending;
    }

    /// Last resolved response wins, whatever was pending before
    pub fn set_text(&mut self, text: String) {
        self.status = AdvisorStatus::Ready(text);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<UserAction> {
        match key {
            KeyCode::Char('a') | KeyCode::Enter => Some(UserAction::Analyze),
            _ => None,
        }
    }
}
