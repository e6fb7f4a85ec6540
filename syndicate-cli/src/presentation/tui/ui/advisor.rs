use crate::presentation::tui::app::{AdvisorStatus, App};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_advisor(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = match app.advisor_tab.status() {
        AdvisorStatus::Idle => vec![
            Line::from(""),
            Line::from("Press 'a' or Enter to request a narrative reading of the roster."),
            Line::from(""),
            Line::from(Span::styled(
                "Requires GEMINI_API_KEY in the environment.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        AdvisorStatus::Pending => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Consulting the shadows...",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::ITALIC),
            )),
        ],
        AdvisorStatus::Ready(text) => {
            text.lines().map(|l| Line::from(l.to_string())).collect()
        }
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Narrative Advisor"),
        );

    f.render_widget(paragraph, area);
}
