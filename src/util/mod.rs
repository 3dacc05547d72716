mod format;
mod path;

pub use format::{format_duration, format_mod_date, format_size};
pub use path::{shorten_path, truncate_name};
