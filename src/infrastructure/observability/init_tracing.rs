use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use super::TracingConfig;

const APP_LOG_PREFIX: &str = "app.log";
const ERROR_LOG_PREFIX: &str = "error.log";

/// Initialize the tracing subscriber with structured logging.
///
/// The returned guards flush the file writers and must be held for the lifetime of the
/// process.
pub fn init_tracing(config: &TracingConfig, port: u16) -> Vec<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,carescribe=debug,tower_http=debug"));

    let console_layer = if config.json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let mut guards = Vec::new();
    let file_layers = config.log_directory.as_ref().map(|dir| {
        let (app_writer, app_guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, APP_LOG_PREFIX));
        let (error_writer, error_guard) = tracing_appender::non_blocking(
            tracing_appender::rolling::daily(dir, ERROR_LOG_PREFIX),
        );
        guards.push(app_guard);
        guards.push(error_guard);

        fmt::layer()
            .with_ansi(false)
            .with_writer(app_writer)
            .and_then(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(error_writer)
                    .with_filter(LevelFilter::ERROR),
            )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layers)
        .init();

    tracing::info!(
        port = port,
        environment = %config.environment,
        json_format = config.json_format,
        log_directory = ?config.log_directory,
        "Server initialized"
    );

    guards
}
