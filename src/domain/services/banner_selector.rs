//! Banner Selector Service
//!
//! Pure domain logic for deciding which banners are valid and which one
//! to display. This service has NO external dependencies beyond the
//! clock value handed to it.

use crate::domain::entities::EvaluationContext;
use crate::domain::ports::Banner;
use crate::domain::value_objects::{InternalNetwork, PromotionalPeriod};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A banner that passed validation, with its parsed period.
#[derive(Clone)]
pub struct ValidBanner {
    pub banner: Arc<dyn Banner>,
    pub period: PromotionalPeriod,
}

impl std::fmt::Debug for ValidBanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidBanner")
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

/// Selector for valid banners.
///
/// A banner is valid when it is not flagged expired and `now` lies
/// within its promotional period. Callers inside the internal network
/// only need `now` before the expiration.
pub struct BannerSelector;

impl BannerSelector {
    /// Check whether the context's caller is on the internal network.
    pub fn is_internal(ctx: &EvaluationContext, network: &InternalNetwork) -> bool {
        ctx.client_ip()
            .map(|ip| network.contains_str(ip))
            .unwrap_or(false)
    }

    /// Check whether a banner is within its promotional period at `now`.
    ///
    /// Never fails: unparsable timestamps yield false.
    pub fn within_period(
        ctx: &EvaluationContext,
        banner: &dyn Banner,
        network: &InternalNetwork,
        now: DateTime<Utc>,
    ) -> bool {
        Self::period_at(ctx, banner, network, now).is_some()
    }

    /// Check whether a banner is valid at `now`.
    pub fn is_valid(
        ctx: &EvaluationContext,
        banner: &dyn Banner,
        network: &InternalNetwork,
        now: DateTime<Utc>,
    ) -> bool {
        !banner.is_expired() && Self::within_period(ctx, banner, network, now)
    }

    /// Keep the valid banners, in input order.
    pub fn filter_valid(
        ctx: &EvaluationContext,
        banners: Vec<Arc<dyn Banner>>,
        network: &InternalNetwork,
        now: DateTime<Utc>,
    ) -> Vec<ValidBanner> {
        let internal = Self::is_internal(ctx, network);

        banners
            .into_iter()
            .filter(|banner| !banner.is_expired())
            .filter_map(|banner| {
                let period = Self::parse_period(banner.as_ref())?;
                period
                    .contains(now, internal)
                    .then_some(ValidBanner { banner, period })
            })
            .collect()
    }

    /// Pick the banner with the earliest expiration.
    ///
    /// Ties go to the banner that appears first.
    pub fn pick_earliest(banners: &[ValidBanner]) -> Option<&ValidBanner> {
        let mut best: Option<&ValidBanner> = None;

        for candidate in banners {
            match best {
                Some(current) if candidate.period.expiration < current.period.expiration => {
                    best = Some(candidate);
                }
                None => best = Some(candidate),
                _ => {}
            }
        }

        best
    }

    fn period_at(
        ctx: &EvaluationContext,
        banner: &dyn Banner,
        network: &InternalNetwork,
        now: DateTime<Utc>,
    ) -> Option<PromotionalPeriod> {
        let period = Self::parse_period(banner)?;
        period
            .contains(now, Self::is_internal(ctx, network))
            .then_some(period)
    }

    fn parse_period(banner: &dyn Banner) -> Option<PromotionalPeriod> {
        let period = PromotionalPeriod::parse(banner.start(), banner.expiration());
        if period.is_none() {
            tracing::debug!(
                "ignoring banner with malformed timestamps start={:?} expiration={:?}",
                banner.start(),
                banner.expiration()
            );
        }
        period
    }
}
