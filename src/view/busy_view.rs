use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::viewmodel::AppViewModel;

use super::ui_fmt;

/// Placeholder shown while a scan or cleanup runs
pub fn render(frame: &mut Frame, vm: &AppViewModel, label: &str, area: Rect) {
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(ui_fmt::spinner_frame(vm.spinner_tick()), Style::default().fg(Color::Magenta)),
            Span::raw(" "),
            Span::styled(label.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::raw(""),
        Line::from(Span::styled("   q quit", Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::ALL).title("dustpan"));
    frame.render_widget(body, area);
}
