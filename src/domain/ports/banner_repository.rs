//! Banner Repository Port
//!
//! Defines the interface for reading and persisting banners.
//! Implementations may use a database, flat files, or in-memory storage.

use crate::domain::error::BannerError;
use crate::domain::ports::Banner;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository for accessing banner records.
///
/// This is an outbound port that abstracts the storage mechanism.
/// Any synchronisation between concurrent readers and writers is the
/// implementation's responsibility.
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Get every stored banner, in store order.
    async fn get_banners(&self) -> Result<Vec<Arc<dyn Banner>>, BannerError>;

    /// Persist a new banner.
    async fn save_banner(&self, banner: Arc<dyn Banner>) -> Result<(), BannerError>;
}
