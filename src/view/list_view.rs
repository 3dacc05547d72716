use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::Entry;
use crate::util::{format_duration, format_mod_date, format_size, shorten_path, truncate_name};
use crate::viewmodel::{AppViewModel, DisplayRow};

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &AppViewModel, home: Option<&Path>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Min(0),     // List
            Constraint::Length(3),  // Stats
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_list(frame, vm, home, chunks[1]);
    render_stats(frame, vm, chunks[2]);
    render_footer(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, vm: &AppViewModel, area: Rect) {
    let status = if let Some(err) = vm.error() {
        Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(msg) = vm.message() {
        let color = if msg.starts_with("Error") { Color::Red } else { Color::Green };
        Line::from(Span::styled(msg.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)))
    } else {
        Line::from(Span::styled(
            format!("Scanned in {}", format_duration(vm.scan_duration())),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Clean up your caches", Style::default().fg(Color::DarkGray)),
        ]),
        status,
    ])
    .block(Block::default().borders(Borders::ALL).title("dustpan"));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, vm: &AppViewModel, home: Option<&Path>, area: Rect) {
    let items: Vec<ListItem> = vm
        .rows()
        .iter()
        .filter_map(|row| vm.entry(row).map(|entry| render_row(row, entry, home)))
        .collect();

    let title = format!("Items ({})", items.len());
    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled("No items found.", Style::default().fg(Color::DarkGray))))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(vm.cursor()));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_row(row: &DisplayRow, entry: &Entry, home: Option<&Path>) -> ListItem<'static> {
    let checkbox_color = if entry.selected { Color::Red } else { Color::DarkGray };
    let (indent, name_width) = if row.is_child() { ("    ", 25) } else { ("", 20) };
    let icon = if row.is_child() { "  " } else { ui_fmt::expand_icon(entry.is_category, entry.expanded) };
    let name_style = if row.is_child() { Style::default().fg(Color::Gray) } else { Style::default().fg(Color::White) };

    let line = Line::from(vec![
        Span::raw(indent),
        Span::styled(ui_fmt::checkbox(entry.selected), Style::default().fg(checkbox_color)),
        Span::raw(" "),
        Span::styled(icon, Style::default().fg(Color::LightMagenta)),
        Span::styled(format!("{:<width$}", truncate_name(&entry.name, name_width), width = name_width), name_style),
        Span::raw("  "),
        Span::styled(format!("{:>10}", format_size(entry.size)), Style::default().fg(ui_fmt::size_color(entry.size))),
        Span::raw("  "),
        Span::styled(format!("{:>8} files", entry.file_count), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(format_mod_date(entry.newest_mod_time), Style::default().fg(Color::LightBlue)),
    ]);

    if row.is_child() {
        return ListItem::new(line);
    }

    let path_line = Line::from(vec![
        Span::raw("       "),
        Span::styled(
            shorten_path(&entry.path, home),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
        Span::raw("  "),
        Span::styled(
            entry.description.clone().unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    ListItem::new(vec![line, path_line])
}

fn render_stats(frame: &mut Frame, vm: &AppViewModel, area: Rect) {
    let mut spans = vec![
        Span::raw("Total: "),
        Span::styled(format_size(vm.total_size()), Style::default().fg(Color::Blue)),
        Span::raw("  │  Selected: "),
        Span::styled(format_size(vm.selected_size()), Style::default().fg(Color::LightMagenta)),
        Span::raw(format!("  │  Items: {}", vm.rows().len())),
    ];
    if !vm.filter().is_empty() {
        spans.push(Span::raw("  │  Filter: "));
        spans.push(Span::styled(vm.filter().to_string(), Style::default().fg(Color::Yellow)));
    }

    let stats = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)), Span::raw(" nav  "),
        Span::styled("space", Style::default().fg(Color::Yellow)), Span::raw(" select  "),
        Span::styled("enter", Style::default().fg(Color::Yellow)), Span::raw(" expand  "),
        Span::styled("a/A", Style::default().fg(Color::Yellow)), Span::raw(" all/none  "),
        Span::styled("t", Style::default().fg(Color::Yellow)), Span::raw(" trash  "),
        Span::styled("c", Style::default().fg(Color::Yellow)), Span::raw(" clean  "),
        Span::styled("r", Style::default().fg(Color::Yellow)), Span::raw(" rescan  "),
        Span::styled("/", Style::default().fg(Color::Yellow)), Span::raw(" filter  "),
        Span::styled("?", Style::default().fg(Color::Yellow)), Span::raw(" help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)), Span::raw(" quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
