use crate::presentation::tui::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn render_roster(f: &mut Frame, area: Rect, app: &App) {
    let roster = &app.roster;
    let night_count = roster.night_count();

    let mut header_cells = vec![
        Cell::from("#"),
        Cell::from("Role"),
        Cell::from("Player"),
    ];
    for night in 1..=night_count {
        header_cells.push(Cell::from(format!("N{}", night)));
    }
    header_cells.push(Cell::from("Status"));

    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let selected_row = app.roster_tab.selected_row();
    let selected_col = app.roster_tab.selected_col();

    let rows: Vec<Row> = roster
        .sorted_slots()
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            let is_selected_row = idx == selected_row;

            let player_text = match slot.assigned_player_id() {
                Some(id) => roster
                    .player_name(id)
                    .unwrap_or("Unknown")
                    .to_string(),
                None => "- VACANT -".to_string(),
            };

            let cell_style = |col: usize| {
                if is_selected_row && col == selected_col {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                }
            };

            let mut cells = vec![
                Cell::from(format!("{}", idx + 1)),
                Cell::from(format!("{} [{}]", slot.role(), slot.role().category())),
                Cell::from(player_text).style(cell_style(0)),
            ];

            for night in 0..night_count {
                let text = match slot.action(night) {
                    Some(action) => roster
                        .player_name_for_action(action)
                        .unwrap_or("Unknown")
                        .to_string(),
                    None => "-".to_string(),
                };
                cells.push(Cell::from(text).style(cell_style(night + 1)));
            }

            let status = if slot.is_alive() { "Alive" } else { "Dead" };
            cells.push(Cell::from(status).style(if slot.is_alive() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            }));

            let mut row = Row::new(cells);
            if !slot.is_alive() {
                row = row.style(Style::default().add_modifier(Modifier::DIM));
            }
            if is_selected_row {
                row = row.style(Style::default().bg(Color::DarkGray));
            }
            row
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(3),
        Constraint::Length(22),
        Constraint::Length(16),
    ];
    widths.extend(std::iter::repeat(Constraint::Length(12)).take(night_count));
    widths.push(Constraint::Length(7));

    let title = format!(
        "Roster ({} roles, {} players, {} nights)",
        roster.slots().len(),
        roster.players().len(),
        night_count
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}
