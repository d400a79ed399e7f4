//! Error types for market_watch operations

use std::fmt;

/// Unified error type for catalog, watchlist and market refresh operations
#[derive(Debug)]
pub enum Error {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response or persisted state
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    Io(std::io::Error),
    /// Every catalog mirror was tried and none returned a usable item list
    CatalogUnavailable,
    /// A refresh or watchlist add was requested with no item selected
    NoItemSelected,
    /// The paired history/snapshot refresh failed; message covers both halves
    Refresh(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "Network error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::CatalogUnavailable => {
                write!(f, "Item catalog unavailable: all mirrors failed")
            }
            Error::NoItemSelected => write!(f, "Pick an item first"),
            Error::Refresh(msg) => write!(f, "Error loading market data: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result alias for market_watch operations
pub type Result<T> = std::result::Result<T, Error>;
