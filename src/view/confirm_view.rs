use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::repository::CleanMode;
use crate::util::{format_size, shorten_path};
use crate::viewmodel::AppViewModel;

pub fn render(frame: &mut Frame, vm: &AppViewModel, mode: CleanMode, home: Option<&Path>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Warning
            Constraint::Min(0),     // Targets
            Constraint::Length(3),  // Prompt
        ])
        .split(area);

    let plan = vm.pending_plan(mode);

    let warning = match mode {
        CleanMode::Permanent => Line::from(Span::styled(
            "WARNING: This will PERMANENTLY remove these files! They cannot be recovered!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        CleanMode::Trash => Line::from(Span::styled(
            "Items will be moved to the trash.",
            Style::default().fg(Color::Gray),
        )),
    };
    let header = Paragraph::new(vec![warning])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(format!("Confirm {}", mode.verb())));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = plan
        .targets
        .iter()
        .map(|target| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw("• "),
                    Span::styled(target.name.clone(), Style::default().fg(Color::White)),
                    Span::raw(" ("),
                    Span::styled(format_size(target.size), Style::default().fg(Color::Cyan)),
                    Span::raw(")"),
                ]),
                Line::from(Span::styled(
                    format!("  {}", shorten_path(&target.path, home)),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Targets"));
    frame.render_widget(list, chunks[1]);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} {} items ({})?  ", mode.verb(), plan.targets.len(), format_size(plan.planned_bytes())),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("y", Style::default().fg(Color::Yellow)), Span::raw(" confirm  "),
        Span::styled("n/Esc", Style::default().fg(Color::Yellow)), Span::raw(" cancel"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(prompt, chunks[2]);
}
