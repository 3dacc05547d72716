mod entry;
mod scan;

pub use entry::{Entry, EntryId};
pub use scan::ScanResult;
