mod app_viewmodel;
mod cache_tree;
mod projection;
mod selection;

pub use app_viewmodel::{Action, AppViewModel, ViewState};
pub use cache_tree::SelectionTree;
pub use projection::{project, DisplayRow};
pub use selection::Selectable;
