//! Banner Selector Library
//!
//! Picks the promotional banner to show a caller: filters banners by
//! their promotional period, lets internal-network callers preview
//! banners early, and displays the valid banner that expires first.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::InMemoryBannerRepository;
pub use application::BannerService;
pub use config::{load_config, Config};
pub use domain::entities::{EvaluationContext, PromoBanner};
pub use domain::error::BannerError;
pub use domain::ports::{Banner, BannerRepository};
pub use domain::services::{BannerSelector, ValidBanner};
pub use domain::value_objects::{InternalNetwork, PromotionalPeriod};
