//! Background execution of scans and cleanups
//!
//! Each job runs on the blocking pool with its own data and hands exactly one
//! `Completion` back to the interactive loop.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::error::{CleanupError, ScanError};
use crate::model::ScanResult;

use super::cleaner::{self, CleanupPlan, CleanupReport};
use super::scanner::{CacheScanner, NoopProgress};
use super::PathCatalog;

/// Long-running work requested by the interactive loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Scan,
    Clean(CleanupPlan),
}

/// Result of a job, delivered back onto the loop
#[derive(Debug)]
pub enum Completion {
    Scan(Result<ScanResult, ScanError>),
    Clean(Result<CleanupReport, CleanupError>),
}

pub struct Worker {
    /// `None` when the catalog could not be resolved at startup
    catalog: Option<Arc<PathCatalog>>,
    tx: UnboundedSender<Completion>,
}

impl Worker {
    pub fn new(catalog: Option<Arc<PathCatalog>>, tx: UnboundedSender<Completion>) -> Self {
        Self { catalog, tx }
    }

    /// Start `job` off the loop. Must be called inside a tokio runtime.
    pub fn dispatch(&self, job: Job) {
        let catalog = self.catalog.clone();
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let completion = run_job(catalog, job);
            if tx.send(completion).is_err() {
                debug!("completion dropped, loop already gone");
            }
        });
    }
}

/// Run a job to completion on the current thread
pub fn run_job(catalog: Option<Arc<PathCatalog>>, job: Job) -> Completion {
    match job {
        Job::Scan => Completion::Scan(match catalog {
            Some(catalog) => Ok(CacheScanner::new(catalog).scan(&NoopProgress)),
            None => Err(ScanError::Configuration),
        }),
        Job::Clean(plan) => Completion::Clean(cleaner::run_plan(&plan)),
    }
}
