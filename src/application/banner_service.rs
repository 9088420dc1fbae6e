//! Banner Service - Main application use case
//!
//! Orchestrates banner selection: reading banners from the repository,
//! filtering the valid ones, and displaying the one that expires first.
//! This is the primary interface for the hosting application.

use crate::config::Config;
use crate::domain::entities::EvaluationContext;
use crate::domain::error::BannerError;
use crate::domain::ports::{Banner, BannerRepository};
use crate::domain::services::BannerSelector;
use crate::domain::value_objects::InternalNetwork;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Banner service - main application use case.
///
/// Holds no state between calls. Each operation reads the clock once
/// and uses that instant for every banner it evaluates.
pub struct BannerService {
    repo: Arc<dyn BannerRepository>,
    network: InternalNetwork,
}

impl BannerService {
    /// Create a service using the default `10.0.0.0/8` internal network.
    pub fn new(repo: Arc<dyn BannerRepository>) -> Self {
        Self::with_network(repo, InternalNetwork::default())
    }

    /// Create a service with a custom internal network.
    pub fn with_network(repo: Arc<dyn BannerRepository>, network: InternalNetwork) -> Self {
        Self { repo, network }
    }

    /// Create a service from loaded configuration.
    pub fn from_config(repo: Arc<dyn BannerRepository>, cfg: &Config) -> Self {
        Self::with_network(repo, cfg.internal_network())
    }

    /// The internal network used for preview access.
    pub fn network(&self) -> &InternalNetwork {
        &self.network
    }

    /// List the banners that are valid right now, in store order.
    ///
    /// A banner flagged expired is excluded even if it is within its
    /// promotional period.
    pub async fn list_valid_banners(
        &self,
        ctx: &EvaluationContext,
    ) -> Result<Vec<Arc<dyn Banner>>, BannerError> {
        self.list_valid_banners_at(ctx, Utc::now()).await
    }

    /// List the banners that are valid at `now`.
    pub async fn list_valid_banners_at(
        &self,
        ctx: &EvaluationContext,
        now: DateTime<Utc>,
    ) -> Result<Vec<Arc<dyn Banner>>, BannerError> {
        let banners = self.read_banners().await?;
        let valid = BannerSelector::filter_valid(ctx, banners, &self.network, now);

        Ok(valid.into_iter().map(|v| v.banner).collect())
    }

    /// Save a banner to the repository.
    ///
    /// Timestamps are not checked here; a malformed banner is stored
    /// and then never selected.
    pub async fn add_banner(&self, banner: Arc<dyn Banner>) -> Result<(), BannerError> {
        self.repo.save_banner(banner).await.map_err(|e| {
            tracing::warn!("failed to save banner: {}", e);
            e
        })
    }

    /// Display the valid banner that expires first.
    ///
    /// Returns `Ok(false)` when nothing is valid, `Ok(true)` once a banner
    /// was shown, and the display error if showing it failed. Only one
    /// banner is ever attempted per call.
    pub async fn display_appropriate_banner(
        &self,
        ctx: &EvaluationContext,
    ) -> Result<bool, BannerError> {
        self.display_appropriate_banner_at(ctx, Utc::now()).await
    }

    /// Display the banner that is appropriate at `now`.
    pub async fn display_appropriate_banner_at(
        &self,
        ctx: &EvaluationContext,
        now: DateTime<Utc>,
    ) -> Result<bool, BannerError> {
        let banners = self.read_banners().await?;
        let valid = BannerSelector::filter_valid(ctx, banners, &self.network, now);

        let Some(chosen) = BannerSelector::pick_earliest(&valid) else {
            tracing::debug!("no valid banners to display");
            return Ok(false);
        };

        tracing::debug!(
            "displaying banner expiring at {} ({} candidates, client_ip={:?})",
            chosen.period.expiration,
            valid.len(),
            ctx.client_ip()
        );

        if let Err(e) = chosen.banner.display() {
            tracing::warn!("banner display failed: {}", e);
            return Err(e);
        }

        Ok(true)
    }

    async fn read_banners(&self) -> Result<Vec<Arc<dyn Banner>>, BannerError> {
        self.repo.get_banners().await.map_err(|e| {
            tracing::warn!("failed to read banners: {}", e);
            e
        })
    }
}
