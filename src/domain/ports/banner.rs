//! Banner Port
//!
//! Defines the interface a displayable banner record exposes.
//! Records are owned by the store; the domain only reads them and
//! triggers display.

use crate::domain::error::BannerError;

/// A promotional banner.
///
/// Timestamps are RFC 3339 strings. A banner whose `start` or
/// `expiration` does not parse is never displayed.
pub trait Banner: Send + Sync {
    /// When the promotional period ends (RFC 3339).
    fn expiration(&self) -> &str;

    /// When the promotional period begins (RFC 3339).
    fn start(&self) -> &str;

    /// Whether the banner was retired by external logic.
    ///
    /// An expired banner is excluded regardless of its time window.
    fn is_expired(&self) -> bool;

    /// Show the banner to the user.
    fn display(&self) -> Result<(), BannerError>;
}
