//! Headliner binary entrypoint kept minimal. The full runtime lives in `headliner::app`.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

struct HeadlinerTimer;

impl tracing_subscriber::fmt::time::FormatTime for HeadlinerTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/headliner/logs/headliner.log`.
///
/// Inputs:
/// - `level`: Default filter directive; `RUST_LOG` takes precedence when set
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = headliner::theme::logs_dir().join("headliner.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(HeadlinerTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(HeadlinerTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// What: Map the outcome of the interactive run to a process exit code.
///
/// Output:
/// - `ExitCode::SUCCESS` on `Ok`; otherwise logs and prints the error and returns
///   `ExitCode::FAILURE`.
fn run_exit_code<E: fmt::Display + fmt::Debug>(result: Result<(), E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "application error");
            eprintln!("headliner: {err}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = args::apply_overrides(&args, headliner::theme::settings());

    if args.list {
        return if args::list::handle_list(&settings).await {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    tracing::info!("headliner starting");
    let code = run_exit_code(headliner::app::run(settings).await);
    tracing::info!("headliner exited");
    code
}

#[cfg(test)]
mod tests {
    /// What: `FormatTime` impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives the date-T-time layout
    #[test]
    fn headliner_timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::HeadlinerTimer.format_time(&mut writer);
        assert!(buf.contains("-T "));
        assert_eq!(buf.len(), "2022-08-24-T 17:27:34".len());
    }

    #[test]
    /// What: A failed run maps to a non-zero exit code
    ///
    /// - Input: `Ok(())`; `Err("terminal unavailable")`
    /// - Output: `ExitCode::SUCCESS`; `ExitCode::FAILURE`
    fn run_exit_code_reports_failure() {
        use std::process::ExitCode;
        assert_eq!(super::run_exit_code::<String>(Ok(())), ExitCode::SUCCESS);
        assert_eq!(
            super::run_exit_code(Err("terminal unavailable".to_string())),
            ExitCode::FAILURE
        );
    }
}
