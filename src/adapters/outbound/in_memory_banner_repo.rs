//! In-Memory Banner Repository
//!
//! Implements BannerRepository with an ordered list behind a lock.

use crate::domain::error::BannerError;
use crate::domain::ports::{Banner, BannerRepository};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory banner repository.
///
/// Banners are kept in insertion order, which is the order the
/// selector sees them in.
pub struct InMemoryBannerRepository {
    banners: RwLock<Vec<Arc<dyn Banner>>>,
}

impl InMemoryBannerRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            banners: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository seeded with `banners`.
    pub fn with_banners(banners: Vec<Arc<dyn Banner>>) -> Self {
        Self {
            banners: RwLock::new(banners),
        }
    }

    pub fn len(&self) -> usize {
        self.banners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.read().is_empty()
    }
}

impl Default for InMemoryBannerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BannerRepository for InMemoryBannerRepository {
    async fn get_banners(&self) -> Result<Vec<Arc<dyn Banner>>, BannerError> {
        Ok(self.banners.read().clone())
    }

    async fn save_banner(&self, banner: Arc<dyn Banner>) -> Result<(), BannerError> {
        let mut banners = self.banners.write();
        banners.push(banner);
        tracing::debug!("stored banner, total={}", banners.len());
        Ok(())
    }
}
