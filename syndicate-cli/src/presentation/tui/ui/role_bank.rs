use crate::presentation::tui::app::{App, RoleBankTab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use syndicate_core::Role;

pub fn render_role_bank(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let selected = app.role_bank_tab.selected();

    let mut items: Vec<ListItem> = Vec::new();
    let mut flat_idx = 0usize;

    for (category, roles) in Role::grouped_by_category() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} Units", category),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))));

        for role in roles {
            let is_selected = flat_idx == selected;
            let prefix = if is_selected { "> " } else { "  " };

            let mut item = ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::raw(format!("{}", role)),
                Span::styled(
                    format!("  (wakes {})", role.priority()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            if is_selected {
                item = item.style(Style::default().bg(Color::DarkGray));
            }
            items.push(item);
            flat_idx += 1;
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Role Bank (Enter to deploy)"),
    );
    f.render_widget(list, chunks[0]);

    // Detail panel for the highlighted role
    let detail: Vec<Line> = match RoleBankTab::display_order().get(selected) {
        Some(role) => {
            let info = role.info();
            vec![
                Line::from(Span::styled(
                    format!("{} [{}]", role, info.category),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(info.description),
                Line::from(Span::styled(
                    info.ability,
                    Style::default().fg(Color::Yellow),
                )),
            ]
        }
        None => vec![Line::from("")],
    };

    let paragraph = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Dossier"));
    f.render_widget(paragraph, chunks[1]);
}
