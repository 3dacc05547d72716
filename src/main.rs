use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};

use dustpan::cli::Cli;
use dustpan::error::ScanError;
use dustpan::input::map_key_to_intent;
use dustpan::logging;
use dustpan::model::ScanResult;
use dustpan::repository::{CacheScanner, Completion, IndicatifProgress, Job, PathCatalog, Worker};
use dustpan::util::{format_duration, format_mod_date, format_size, shorten_path};
use dustpan::view;
use dustpan::viewmodel::{Action, AppViewModel};

/// Input poll interval; also paces the spinner
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_path) = cli.log_file.clone().or_else(logging::default_log_path) {
        if !logging::init_logging(&log_path) {
            eprintln!("dustpan: logging disabled, cannot open {}", log_path.display());
        }
    }

    let home = cli.home.clone().or_else(dirs::home_dir);
    let catalog = match &cli.home {
        Some(base) => Ok(PathCatalog::for_home(base)),
        None => PathCatalog::from_home_dir(),
    };
    let catalog = match catalog {
        Ok(catalog) => Some(Arc::new(catalog)),
        Err(err) => {
            warn!(error = %err, "no catalog available");
            None
        }
    };

    if cli.list {
        let catalog = catalog.ok_or(ScanError::Configuration)?;
        return print_report(catalog, cli.json, home.as_deref());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let worker = Worker::new(catalog, tx);
    let result = run(&mut terminal, &worker, rx, home.as_deref());

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: one input or completion at a time, redraw after each
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    worker: &Worker,
    mut completions: UnboundedReceiver<Completion>,
    home: Option<&Path>,
) -> Result<()> {
    let mut app = AppViewModel::new();
    worker.dispatch(Job::Scan);

    loop {
        // Render
        terminal.draw(|f| view::render(f, &app, home))?;

        // Apply finished background work
        while let Ok(completion) = completions.try_recv() {
            if let Action::Dispatch(job) = app.handle_completion(completion) {
                worker.dispatch(job);
            }
        }

        // Handle input
        if !event::poll(TICK)? {
            app.tick();
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(intent) = map_key_to_intent(&key, app.input_mode()) {
                    match app.handle_intent(intent) {
                        Action::Quit => break,
                        Action::Redraw => {}
                        Action::Dispatch(job) => worker.dispatch(job),
                    }
                }
            }
        }
    }

    info!("session ended");
    Ok(())
}

/// Non-interactive mode: scan once and print the result
fn print_report(catalog: Arc<PathCatalog>, json: bool, home: Option<&Path>) -> Result<()> {
    let result = CacheScanner::new(catalog).scan(&IndicatifProgress);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result).context("Could not encode scan result")?;
        writeln!(out)?;
        return Ok(());
    }

    write_report(&mut out, &result, home)?;
    Ok(())
}

fn write_report(out: &mut impl Write, result: &ScanResult, home: Option<&Path>) -> io::Result<()> {
    if result.is_empty() {
        writeln!(out, "No items found.")?;
    }

    for entry in &result.entries {
        writeln!(
            out,
            "{:>10}  {:<24} {:>8} files  {}  {}",
            format_size(entry.size),
            entry.description.as_deref().unwrap_or(&entry.name),
            entry.file_count,
            format_mod_date(entry.newest_mod_time),
            shorten_path(&entry.path, home),
        )?;
        for child in &entry.children {
            writeln!(
                out,
                "{:>10}    {:<22} {:>8} files  {}",
                format_size(child.size),
                child.name,
                child.file_count,
                format_mod_date(child.newest_mod_time),
            )?;
        }
    }

    writeln!(
        out,
        "\nTotal: {}  ({} locations, scanned in {})",
        format_size(result.total_size),
        result.entries.len(),
        format_duration(result.scan_duration),
    )?;
    if result.skipped > 0 {
        writeln!(out, "{} unreadable items were left out of the totals", result.skipped)?;
    }
    Ok(())
}
