use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_level: tracing::Level,
    pub file_output: Option<String>,
    pub show_thread_ids: bool,
    pub show_targets: bool,
    pub show_logs: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: tracing::Level::INFO,
            file_output: None,
            show_thread_ids: false,
            show_targets: true,
            show_logs: true,
        }
    }
}

impl LogConfig {
    /// Development configuration (verbose, human-readable)
    pub fn dev() -> Self {
        Self {
            default_level: tracing::Level::DEBUG,
            show_thread_ids: true,
            ..Default::default()
        }
    }

    /// TUI mode (no stdout logs, they would corrupt the alternate screen)
    pub fn tui() -> Self {
        Self {
            default_level: tracing::Level::INFO,
            show_logs: false,
            ..Default::default()
        }
    }

    /// Hide logs
    pub fn without_logs(mut self) -> Self {
        self.show_logs = false;
        self
    }

    /// Log to file
    pub fn with_file_output(mut self, path: String) -> Self {
        self.file_output = Some(path);
        self
    }

    pub fn init(self) -> Result<(), String> {
        // Build env filter
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.default_level
            ))
            .add_directive("syndicate_core=debug".parse().unwrap())
            .add_directive("syndicate_advisor=debug".parse().unwrap())
        });

        // File output takes priority: safe in both plain and TUI mode
        if let Some(path) = &self.file_output {
            let file = File::create(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;

            let file_layer = fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(self.show_targets)
                .with_thread_ids(self.show_thread_ids);

            return tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e));
        }

        if self.show_logs {
            let fmt_layer = fmt::layer()
                .with_target(self.show_targets)
                .with_thread_ids(self.show_thread_ids);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e))
        } else {
            // Silent mode: no fmt layer, just filter
            tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e))
        }
    }
}
