use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("Invalid value for {field}: {token:?}")]
    InvalidToken { field: &'static str, token: String },

    #[error("Input stream is in a failed state")]
    StreamFailed,

    #[error("Labeled format error at line {line}: {message}")]
    LabeledFormat { line: usize, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PersonError {
    /// True for errors raised while extracting tokens from an input stream.
    pub fn is_stream_failure(&self) -> bool {
        matches!(
            self,
            PersonError::UnexpectedEof { .. }
                | PersonError::InvalidToken { .. }
                | PersonError::StreamFailed
        )
    }
}

pub type Result<T> = std::result::Result<T, PersonError>;
