mod catalog;
mod cleaner;
mod scanner;
mod worker;

pub use catalog::{CatalogEntry, PathCatalog};
pub use cleaner::{
    run_plan, CleanMode, CleanupExecutor, CleanupPlan, CleanupReport, CleanupTarget,
    PathRemover, PermanentRemover, TrashRemover,
};
pub use scanner::{
    build_root, collect_dir_stats, CacheScanner, DirStats, IndicatifProgress, NoopProgress,
    ProgressHandle, ProgressReporter,
};
pub use worker::{run_job, Completion, Job, Worker};
