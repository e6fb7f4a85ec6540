use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )])
}

fn binding(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        section("Roster Tab:"),
        binding("  j/k h/l", "  Move the cursor around the grid"),
        binding("  Enter", "  Open the player picker for the selected cell"),
        binding("  d / Backspace", "  Clear the selected cell"),
        binding("  t", "  Toggle Alive/Dead for the selected role"),
        binding("  x", "  Remove the selected role slot (confirms)"),
        binding("  n", "  Track one more night (up to 10)"),
        binding("  c", "  Clear the selected night column (confirms)"),
        binding("  R", "  Reset assignments, actions and status (confirms)"),
        Line::from(""),
        section("Players Tab:"),
        binding("  Type + Enter", "  Recruit a new player"),
        binding("  Up/Down", "  Select a player"),
        binding("  Del", "  Remove selected player (idle players only)"),
        Line::from(""),
        section("Role Bank Tab:"),
        binding("  j/k", "  Browse the catalog"),
        binding("  Enter", "  Deploy the selected role as a new slot"),
        Line::from(""),
        section("Advisor Tab:"),
        binding("  a / Enter", "  Request a narrative reading"),
        Line::from(""),
        section("Navigation:"),
        binding("  Tab / Right", "  Next tab"),
        binding("  Shift+Tab / Left", "  Previous tab"),
        binding("  q / Esc", "  Quit (on the Players tab, use Esc)"),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keyboard Shortcuts"),
    );

    f.render_widget(paragraph, area);
}
