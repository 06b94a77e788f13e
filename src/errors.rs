// errors.rs
use crate::map::MapError;
use crate::source::SourceError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (sheet source, map).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    SourceError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::SourceError(msg) => write!(f, "Sheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<SourceError> for ServerError {
    fn from(e: SourceError) -> Self {
        ServerError::SourceError(e.to_string())
    }
}

impl From<MapError> for ServerError {
    fn from(_: MapError) -> Self {
        ServerError::NotFound
    }
}
