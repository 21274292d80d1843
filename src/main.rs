//! main.rs
//! Entry point for kman

use kman::app::AppState;
use kman::core::terminal::{self, Outcome};
use kman::core::{SystemRunner, TOOL, list_files, run_bulk};
use kman::logging;

use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = terminal::restore();

        tracing::error!(panic = %info, "panic");
        eprintln!("\n[kman] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let _log_guard = logging::init();

    let root = Path::new(".");
    let files = list_files(root);
    tracing::info!(root = %root.display(), files = files.len(), "loaded directory snapshot");

    let mut app = AppState::new(files);

    let outcome = match terminal::run_terminal(&mut app) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "terminal error");
            eprintln!("[kman] Terminal error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (action, selection) = match outcome {
        Outcome::Quit => return ExitCode::SUCCESS,
        Outcome::Bulk(action, selection) => (action, selection),
    };

    let mut stdout = io::stdout().lock();
    match run_bulk(&mut SystemRunner, TOOL, action, &selection, &mut stdout) {
        Ok(count) => {
            tracing::info!(action = action.label(), invocations = count, "bulk action finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(action = action.label(), error = %e, "bulk action failed");
            eprintln!("[kman] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
