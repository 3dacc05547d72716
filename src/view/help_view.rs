use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("↑/k, ↓/j", "Navigate up/down"),
    ("Enter/l", "Expand/collapse"),
    ("Space", "Toggle selection"),
    ("a", "Select all"),
    ("A", "Deselect all"),
    ("t", "Move to Trash"),
    ("c", "Clean (permanent)"),
    ("r", "Rescan directories"),
    ("/", "Filter items"),
    ("Esc", "Clear filter"),
    ("?", "Show this help"),
    ("q", "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Style::default().fg(Color::LightYellow)),
                Span::raw(*desc),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Press any key to return", Style::default().fg(Color::DarkGray))));

    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(help, area);
}
