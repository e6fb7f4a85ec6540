use crate::presentation::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Centered popup rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn render_overlays(f: &mut Frame, app: &App) {
    if let Some(action) = &app.pending_confirm {
        let area = centered_rect(60, 25, f.area());
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(action.prompt(&app.roster)),
            Line::from(""),
            Line::from(Span::styled(
                "y: confirm    any other key: cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .style(Style::default().fg(Color::Red)),
        );
        f.render_widget(paragraph, area);
        return;
    }

    if let Some(picker) = &app.picker {
        let area = centered_rect(40, 50, f.area());
        f.render_widget(Clear, area);

        let items: Vec<ListItem> = picker
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let prefix = if idx == picker.selected { "> " } else { "  " };

                let mut spans = vec![Span::raw(prefix), Span::raw(option.label.clone())];
                if option.taken {
                    spans.push(Span::styled(
                        " (Taken)",
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::DIM),
                    ));
                }

                let mut item = ListItem::new(Line::from(spans));
                if idx == picker.selected {
                    item = item.style(Style::default().bg(Color::DarkGray));
                }
                item
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(picker.title().to_string()),
        );
        f.render_widget(list, area);
    }
}
