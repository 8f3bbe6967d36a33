//! Error types for cs2_inventory_sync

use std::fmt;

/// Unified error type for synchronization operations
///
/// Per-item price lookup failures have no variant here: they are absorbed
/// inside the price resolver, which substitutes a zero price instead of
/// failing the refresh.
#[derive(Debug)]
pub enum SyncError {
    /// Inventory snapshot request failed (network error or malformed body)
    SourceFetch(reqwest::Error),
    /// Inventory snapshot endpoint returned an error status
    SourceStatus(reqwest::StatusCode),
    /// Inventory snapshot is missing a required section
    MissingSection(&'static str),
    /// Item store read failed
    StoreRead(StoreError),
    /// Item store write failed
    StoreWrite(StoreError),
}

/// Underlying failure when talking to the item store
#[derive(Debug)]
pub enum StoreError {
    /// HTTP request failed (network error, timeout, malformed body)
    Network(reqwest::Error),
    /// Store returned an HTTP error status
    HttpStatus(reqwest::StatusCode),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::SourceFetch(e) => write!(f, "Inventory fetch error: {}", e),
            SyncError::SourceStatus(status) => {
                write!(f, "Inventory endpoint returned HTTP {}", status)
            }
            SyncError::MissingSection(section) => {
                write!(f, "Inventory snapshot missing `{}` section", section)
            }
            SyncError::StoreRead(e) => write!(f, "Store read error: {}", e),
            SyncError::StoreWrite(e) => write!(f, "Store write error: {}", e),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::SourceFetch(e) => Some(e),
            SyncError::SourceStatus(_) => None,
            SyncError::MissingSection(_) => None,
            SyncError::StoreRead(e) => Some(e),
            SyncError::StoreWrite(e) => Some(e),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(e) => write!(f, "Network error: {}", e),
            StoreError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Network(e) => Some(e),
            StoreError::HttpStatus(_) => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Network(err)
    }
}

/// Result alias for synchronization operations
pub type Result<T> = std::result::Result<T, SyncError>;
