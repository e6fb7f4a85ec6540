use crate::presentation::tui::app::{App, Tab};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let shortcuts = if app.pending_confirm.is_some() {
        "y: confirm | any other key: cancel"
    } else if app.picker.is_some() {
        "j/k: select | Enter: apply | Esc: close"
    } else {
        match app.current_tab {
            Tab::Roster => {
                "j/k h/l: move | Enter: pick | d: clear | t: alive | x: remove | n: +night | c: clear night | R: reset | q: quit"
            }
            Tab::Players => "Type name | Enter: add | Up/Down: select | Del: remove | Esc: quit",
            Tab::RoleBank => "j/k: select | Enter: deploy | Tab: switch | q: quit",
            Tab::Advisor => "a / Enter: request analysis | Tab: switch | q: quit",
            Tab::Events => "j/k: scroll | Tab: switch | q: quit",
            Tab::Help => "Tab: switch | q: quit",
        }
    };

    let text = Line::from(shortcuts);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}
