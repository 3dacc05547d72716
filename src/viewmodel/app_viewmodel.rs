use std::time::Duration;

use crate::input::{InputMode, Intent};
use crate::model::{Entry, ScanResult};
use crate::repository::{CleanMode, CleanupPlan, Completion, Job};
use crate::util::format_size;

use super::cache_tree::SelectionTree;
use super::projection::{project, DisplayRow};
use super::selection::Selectable;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState {
    Scanning,
    List,
    Filter,
    Confirm(CleanMode),
    Cleaning,
    Help,
}

/// Action to take after handling an intent or completion
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Redraw,
    Quit,
    Dispatch(Job),
}

/// Main application ViewModel: owns the tree and drives every state transition
pub struct AppViewModel {
    state: ViewState,
    tree: SelectionTree,
    rows: Vec<DisplayRow>,
    cursor: usize,
    total_size: u64,
    scan_duration: Duration,
    filter: String,
    filter_input: String,
    message: Option<String>,
    error: Option<String>,
    spinner_tick: usize,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppViewModel {
    /// Start in the scanning state; the caller dispatches the first `Job::Scan`
    pub fn new() -> Self {
        Self {
            state: ViewState::Scanning,
            tree: SelectionTree::default(),
            rows: Vec::new(),
            cursor: 0,
            total_size: 0,
            scan_duration: Duration::ZERO,
            filter: String::new(),
            filter_input: String::new(),
            message: None,
            error: None,
            spinner_tick: 0,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn input_mode(&self) -> InputMode {
        match self.state {
            ViewState::List => InputMode::List,
            ViewState::Filter => InputMode::Filter,
            ViewState::Confirm(_) => InputMode::Confirm,
            ViewState::Help => InputMode::Help,
            ViewState::Scanning | ViewState::Cleaning => InputMode::Busy,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn entry(&self, row: &DisplayRow) -> Option<&Entry> {
        self.tree.get(row.id)
    }

    pub fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn selected_size(&self) -> u64 {
        self.tree.selected_size()
    }

    pub fn scan_duration(&self) -> Duration {
        self.scan_duration
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    /// Advance animation state between input events
    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// The plan a confirmed cleanup in `mode` would run
    pub fn pending_plan(&self, mode: CleanMode) -> CleanupPlan {
        self.tree.cleanup_plan(mode)
    }

    fn rebuild_rows(&mut self) {
        self.rows = project(self.tree.roots(), &self.filter);
        self.clamp_selected();
    }

    fn cursor_row(&self) -> Option<DisplayRow> {
        self.rows.get(self.cursor).copied()
    }

    fn request_cleanup(&mut self, mode: CleanMode) {
        if self.tree.selected_size() > 0 {
            self.state = ViewState::Confirm(mode);
        }
    }

    fn start_scan(&mut self) -> Action {
        self.state = ViewState::Scanning;
        Action::Dispatch(Job::Scan)
    }

    /// Handle a user intent and return the action to take
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        if intent == Intent::Quit {
            return Action::Quit;
        }

        match self.state {
            ViewState::Scanning | ViewState::Cleaning => Action::Redraw,
            ViewState::Help => {
                self.state = ViewState::List;
                Action::Redraw
            }
            ViewState::Filter => self.handle_filter_intent(intent),
            ViewState::Confirm(mode) => self.handle_confirm_intent(intent, mode),
            ViewState::List => self.handle_list_intent(intent),
        }
    }

    fn handle_filter_intent(&mut self, intent: Intent) -> Action {
        match intent {
            Intent::FilterChar(c) => self.filter_input.push(c),
            Intent::FilterBackspace => {
                self.filter_input.pop();
            }
            Intent::FilterCommit => {
                self.filter = self.filter_input.clone();
                self.state = ViewState::List;
                self.cursor = 0;
                self.rebuild_rows();
            }
            Intent::FilterCancel => {
                self.filter_input = self.filter.clone();
                self.state = ViewState::List;
            }
            _ => {}
        }
        Action::Redraw
    }

    fn handle_confirm_intent(&mut self, intent: Intent, mode: CleanMode) -> Action {
        match intent {
            Intent::Confirm => {
                self.state = ViewState::Cleaning;
                Action::Dispatch(Job::Clean(self.tree.cleanup_plan(mode)))
            }
            Intent::Cancel => {
                self.state = ViewState::List;
                Action::Redraw
            }
            _ => Action::Redraw,
        }
    }

    fn handle_list_intent(&mut self, intent: Intent) -> Action {
        match intent {
            Intent::MoveUp => self.move_up(),
            Intent::MoveDown => self.move_down(),

            Intent::ToggleExpand => {
                if let Some(row) = self.cursor_row().filter(|r| !r.is_child()) {
                    if self.tree.toggle_expand(row.root_index()) {
                        self.rebuild_rows();
                    }
                }
            }

            // Selection never changes which rows are visible
            Intent::ToggleSelect => {
                if let Some(row) = self.cursor_row() {
                    self.tree.toggle_select(row.id);
                }
            }
            Intent::SelectAll => self.tree.select_all(),
            Intent::DeselectAll => self.tree.deselect_all(),

            Intent::RequestDelete => self.request_cleanup(CleanMode::Permanent),
            Intent::RequestTrash => self.request_cleanup(CleanMode::Trash),

            Intent::Rescan => {
                self.message = None;
                self.cursor = 0;
                return self.start_scan();
            }

            Intent::EnterFilter => {
                self.filter_input = self.filter.clone();
                self.state = ViewState::Filter;
            }
            Intent::ClearFilter => {
                if !self.filter.is_empty() {
                    self.filter.clear();
                    self.filter_input.clear();
                    self.cursor = 0;
                    self.rebuild_rows();
                }
            }

            Intent::ShowHelp => self.state = ViewState::Help,
            _ => {}
        }
        Action::Redraw
    }

    /// Apply a finished background job
    pub fn handle_completion(&mut self, completion: Completion) -> Action {
        match completion {
            Completion::Scan(Ok(result)) => {
                self.apply_scan(result);
                Action::Redraw
            }
            Completion::Scan(Err(err)) => {
                self.error = Some(err.to_string());
                self.state = ViewState::List;
                Action::Redraw
            }
            Completion::Clean(result) => {
                self.message = Some(match result {
                    Ok(report) => format!("Cleaned {}!", format_size(report.freed)),
                    Err(err) => format!("Error: {err}"),
                });
                self.start_scan()
            }
        }
    }

    fn apply_scan(&mut self, result: ScanResult) {
        let ScanResult {
            entries,
            total_size,
            scan_duration,
            ..
        } = result;
        self.tree.replace(entries);
        self.total_size = total_size;
        self.scan_duration = scan_duration;
        self.error = None;
        self.state = ViewState::List;
        self.rebuild_rows();
    }
}

impl Selectable for AppViewModel {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn selected(&self) -> usize {
        self.cursor
    }

    fn set_selected(&mut self, index: usize) {
        self.cursor = index;
    }
}
