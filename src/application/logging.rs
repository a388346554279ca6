//! # Logging Setup
//!
//! Installs the global `tracing` subscriber: an env filter, a non-blocking file sink
//! (`<data_dir>/session.log`, cleared on startup) and a console sink.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::config::SystemConfig;

pub const LOG_FILE: &str = "session.log";
const DEFAULT_FILTER: &str =
    "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn";

/// The filter used when `RUST_LOG` is unset.
pub fn default_filter(system: &SystemConfig) -> String {
    system
        .log_filter
        .clone()
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Sets up logging. Keep the returned guard alive for the life of the process,
/// dropping it flushes the file sink.
pub fn init(system: &SystemConfig) -> Result<WorkerGuard> {
    let data_dir = Path::new(&system.data_dir);
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    // Clear previous session log
    let log_path = data_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(system)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
pub mod capture {
    //! Thread-local subscriber that records events, for asserting on warnings.

    use std::sync::{Arc, Mutex};
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub level: Level,
        pub message: String,
    }

    struct CaptureLayer {
        logs: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            if let Ok(mut guard) = self.logs.lock() {
                guard.push(LogEntry {
                    level: *event.metadata().level(),
                    message: visitor.message,
                });
            }
        }
    }

    #[derive(Default)]
    struct MessageVisitor {
        message: String,
    }

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.message = format!("{:?}", value);
            }
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = value.to_string();
            }
        }
    }

    /// Records every event on the current thread until dropped.
    pub struct CapturedLogs {
        logs: Arc<Mutex<Vec<LogEntry>>>,
        _guard: DefaultGuard,
    }

    impl CapturedLogs {
        pub fn install() -> Self {
            let logs = Arc::new(Mutex::new(Vec::new()));
            let subscriber = tracing_subscriber::registry().with(CaptureLayer { logs: logs.clone() });
            let guard = tracing::subscriber::set_default(subscriber);
            Self {
                logs,
                _guard: guard,
            }
        }

        pub fn entries(&self) -> Vec<LogEntry> {
            self.logs.lock().map(|l| l.clone()).unwrap_or_default()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter(|e| e.level == Level::WARN)
                .map(|e| e.message)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let system = SystemConfig::default();
        assert!(default_filter(&system).starts_with("info,matrix_sdk=warn"));

        let system = SystemConfig {
            log_filter: Some("debug".to_string()),
            ..SystemConfig::default()
        };
        assert_eq!(default_filter(&system), "debug");
    }

    #[test]
    fn test_capture_records_warnings() {
        let logs = capture::CapturedLogs::install();
        tracing::info!("hello");
        tracing::warn!("{}", "careful");
        assert_eq!(logs.entries().len(), 2);
        assert_eq!(logs.warnings(), vec!["careful".to_string()]);
    }
}
