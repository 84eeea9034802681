use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::ConfigError;
use crate::settings::Logging;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`. When a log directory is
/// configured the returned guard must be kept alive for the file writer to flush.
pub fn init_tracing(settings: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);

    let (file_layer, guard) = match &settings.directory {
        Some(directory) => {
            let appender = rolling::daily(directory, &settings.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    tracing::info!(
        level = %settings.level,
        directory = ?settings.directory,
        "Logging initialized."
    );
    Ok(guard)
}
