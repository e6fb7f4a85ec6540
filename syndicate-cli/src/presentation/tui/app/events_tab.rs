use crossterm::event::KeyCode;
use std::collections::VecDeque;

/// Events tab state (presentation only)
pub struct EventsTab {
    event_log: VecDeque<String>,
    scroll_offset: usize,
    max_events: usize,
}

impl EventsTab {
    pub fn new() -> Self {
        Self {
            event_log: VecDeque::new(),
            scroll_offset: 0,
            max_events: 100,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn add_event(&mut self, event: String) {
        self.event_log.push_front(event);
        if self.event_log.len() > self.max_events {
            self.event_log.pop_back();
        }
    }

    pub fn event_log(&self) -> &VecDeque<String> {
        &self.event_log
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_event_first() {
        let mut tab = EventsTab::new();
        tab.add_event("one".to_string());
        tab.add_event("two".to_string());
        assert_eq!(tab.event_log().front().map(String::as_str), Some("two"));
    }

    #[test]
    fn test_log_is_bounded() {
        let mut tab = EventsTab::new();
        for i in 0..150 {
            tab.add_event(format!("event {}", i));
        }
        assert_eq!(tab.event_log().len(), 100);
        assert_eq!(
            tab.event_log().front().map(String::as_str),
            Some("event 149")
        );
    }
}
