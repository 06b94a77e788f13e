use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SourceError {
    Config(String),
    Network(String),
    Status { status: u16, body: String },
    Csv(String),
    Io(String),
}

impl SourceError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::Network(_) => true,
            SourceError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "Source configuration error: {msg}"),
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Status { status, body } => {
                write!(f, "Sheet request failed with HTTP {status}: {body}")
            }
            SourceError::Csv(msg) => write!(f, "CSV decode error: {msg}"),
            SourceError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl Error for SourceError {}

impl From<csv::Error> for SourceError {
    fn from(e: csv::Error) -> Self {
        SourceError::Csv(e.to_string())
    }
}
