use super::app::{App, Tab};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod advisor;
mod events;
mod footer;
mod header;
mod help;
mod overlay;
mod players;
mod role_bank;
mod roster;

/// Main render function - orchestrates all tabs
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    header::render_header(f, chunks[0], app);
    render_content(f, chunks[1], app);
    footer::render_footer(f, chunks[2], app);

    // Popups sit on top of whatever tab is showing
    overlay::render_overlays(f, app);
}

/// Route to appropriate tab renderer
fn render_content(f: &mut Frame, area: Rect, app: &App) {
    match app.current_tab {
        Tab::Roster => roster::render_roster(f, area, app),
        Tab::Players => players::render_players(f, area, app),
        Tab::RoleBank => role_bank::render_role_bank(f, area, app),
        Tab::Advisor => advisor::render_advisor(f, area, app),
        Tab::Events => events::render_events(f, area, app),
        Tab::Help => help::render_help(f, area),
    }
}
