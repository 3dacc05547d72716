mod busy_view;
mod confirm_view;
mod filter_view;
mod help_view;
mod list_view;
mod ui_fmt;

use std::path::Path;

use ratatui::Frame;

use crate::viewmodel::{AppViewModel, ViewState};

/// Draw the screen for the current state
pub fn render(frame: &mut Frame, vm: &AppViewModel, home: Option<&Path>) {
    let area = frame.area();
    match vm.state() {
        ViewState::Scanning => busy_view::render(frame, vm, "Scanning directories...", area),
        ViewState::Cleaning => busy_view::render(frame, vm, "Cleaning...", area),
        ViewState::List => list_view::render(frame, vm, home, area),
        ViewState::Filter => filter_view::render(frame, vm, area),
        ViewState::Confirm(mode) => confirm_view::render(frame, vm, mode, home, area),
        ViewState::Help => help_view::render(frame, area),
    }
}
