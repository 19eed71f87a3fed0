use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sensor error: {0}")]
    Sensor(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = ProbeError> = std::result::Result<T, E>;
