//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the banner domain.
//! They carry no storage or transport concerns.

use crate::domain::error::BannerError;
use crate::domain::ports::Banner;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Per-call evaluation context.
///
/// Carries the caller's IP address, which decides whether the caller
/// may preview banners before their start time. No IP means "not
/// internal".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationContext {
    /// Caller IP address as received from the host application
    pub client_ip: Option<String>,
}

impl EvaluationContext {
    /// A context with no caller IP.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context for a caller at `ip`.
    pub fn with_client_ip(ip: impl Into<String>) -> Self {
        Self {
            client_ip: Some(ip.into()),
        }
    }

    pub fn client_ip(&self) -> Option<&str> {
        self.client_ip.as_deref()
    }
}

/// A stock banner record.
///
/// One-time banners retire themselves after a successful display, so
/// later evaluations exclude them.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromoBanner {
    /// Identifier assigned by the store
    pub id: String,
    /// Text shown to the user
    pub content: String,
    /// Start of the promotional period (RFC 3339)
    pub start: String,
    /// End of the promotional period (RFC 3339)
    pub expiration: String,
    /// Retire the banner after its first display
    #[serde(default)]
    pub one_time: bool,
    #[serde(default)]
    expired: AtomicBool,
    #[serde(skip)]
    displays: AtomicU64,
}

impl PromoBanner {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        start: impl Into<String>,
        expiration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            start: start.into(),
            expiration: expiration.into(),
            one_time: false,
            expired: AtomicBool::new(false),
            displays: AtomicU64::new(0),
        }
    }

    /// Mark the banner as one-time-use.
    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }

    /// Set the expired flag up front.
    pub fn expired(self, expired: bool) -> Self {
        self.expired.store(expired, Ordering::SeqCst);
        self
    }

    /// Number of successful displays so far.
    pub fn display_count(&self) -> u64 {
        self.displays.load(Ordering::SeqCst)
    }
}

impl Banner for PromoBanner {
    fn expiration(&self) -> &str {
        &self.expiration
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }

    fn display(&self) -> Result<(), BannerError> {
        if self.content.is_empty() {
            return Err(BannerError::Display(format!(
                "banner {} has no content",
                self.id
            )));
        }

        tracing::info!(banner = %self.id, "{}", self.content);
        self.displays.fetch_add(1, Ordering::SeqCst);

        if self.one_time {
            self.expired.store(true, Ordering::SeqCst);
            tracing::debug!("one-time banner {} retired", self.id);
        }

        Ok(())
    }
}
