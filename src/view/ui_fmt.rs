use ratatui::style::Color;

const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Color for a size: green, yellow from 500 MB, red from 2 GB
pub fn size_color(bytes: u64) -> Color {
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * MB;

    if bytes >= 2 * GB {
        Color::LightRed
    } else if bytes >= 500 * MB {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Checkbox glyph for a selection flag
pub fn checkbox(selected: bool) -> &'static str {
    if selected { "[✓]" } else { "[ ]" }
}

/// Expand/collapse marker; blank for flat entries
pub fn expand_icon(is_category: bool, expanded: bool) -> &'static str {
    match (is_category, expanded) {
        (false, _) => "  ",
        (true, false) => "▶ ",
        (true, true) => "▼ ",
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}
