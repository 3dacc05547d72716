use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::viewmodel::AppViewModel;

pub fn render(frame: &mut Frame, vm: &AppViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Input
            Constraint::Min(0),
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("FILTER", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::raw(" > "),
        Span::styled(vm.filter_input(), Style::default().fg(Color::Yellow)),
        Span::styled("█", Style::default().fg(Color::White)),  // Cursor
    ]))
    .block(Block::default().borders(Borders::ALL).title("Filter by name or label"));
    frame.render_widget(input, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)), Span::raw(" apply  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)), Span::raw(" cancel  "),
        Span::styled("Backspace", Style::default().fg(Color::Yellow)), Span::raw(" delete"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}
