use std::path::PathBuf;

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// When set, logs are also written to daily-rolling files in this directory.
    pub log_directory: Option<PathBuf>,
}
