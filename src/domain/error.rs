//! Domain Errors
//!
//! Failures reported by the outbound ports. The application layer
//! surfaces them to the caller exactly as the port produced them.

use thiserror::Error;

/// Errors that can abort a banner operation.
///
/// Malformed timestamps are deliberately absent: a banner with a bad
/// `start` or `expiration` is simply not valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BannerError {
    /// The store could not enumerate banners.
    #[error("failed to read banners: {0}")]
    StoreRead(String),
    /// The store could not persist a banner.
    #[error("failed to save banner: {0}")]
    StoreWrite(String),
    /// The selected banner could not be displayed.
    #[error("failed to display banner: {0}")]
    Display(String),
}
