use crate::presentation::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render_players(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(format!("{}_", app.players_tab.input()))
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recruit (type a name, Enter to add)"),
        );
    f.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = if app.roster.players().is_empty() {
        vec![ListItem::new("No players recruited yet")]
    } else {
        app.roster
            .players()
            .iter()
            .enumerate()
            .map(|(idx, player)| {
                let selected = idx == app.players_tab.selected();
                let prefix = if selected { "> " } else { "  " };

                let mut spans = vec![
                    Span::raw(prefix),
                    Span::styled(
                        player.name().to_string(),
                        Style::default().fg(Color::White),
                    ),
                ];

                if app.roster.is_player_deployed(player.id()) {
                    spans.push(Span::styled(
                        "  [Deployed]",
                        Style::default().fg(Color::Green),
                    ));
                }

                let mut item = ListItem::new(Line::from(spans));
                if selected {
                    item = item.style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Player Pool ({})", app.roster.players().len())),
    );

    f.render_widget(list, chunks[1]);
}
