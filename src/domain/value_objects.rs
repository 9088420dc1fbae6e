//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use chrono::{DateTime, Timelike, Utc};
use std::net::Ipv4Addr;

/// Parse an RFC 3339 timestamp into a UTC instant.
///
/// Returns None for anything that is not valid RFC 3339. Callers treat
/// that as "not within the period" rather than as an error.
///
/// Only the canonical layout is accepted: an uppercase `T` separator,
/// an uppercase `Z` or a numeric offset, and no leap second.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if !has_canonical_layout(s.as_bytes()) {
        return None;
    }

    let dt = DateTime::parse_from_rfc3339(s).ok()?;
    if dt.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(dt.with_timezone(&Utc))
}

fn has_canonical_layout(s: &[u8]) -> bool {
    if s.get(10) != Some(&b'T') {
        return false;
    }

    match s.last() {
        Some(b'Z') => true,
        Some(c) if c.is_ascii_digit() => {
            s.len() >= 6 && matches!(s[s.len() - 6], b'+' | b'-')
        }
        _ => false,
    }
}

/// Inclusive IPv4 address range treated as the internal network.
///
/// Callers from inside this range may preview banners before their
/// promotional period starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InternalNetwork {
    begin: Ipv4Addr,
    end: Ipv4Addr,
}

impl InternalNetwork {
    /// Create a range from `begin` to `end`, both inclusive.
    pub fn new(begin: Ipv4Addr, end: Ipv4Addr) -> Self {
        Self { begin, end }
    }

    pub fn begin(&self) -> Ipv4Addr {
        self.begin
    }

    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    /// Check whether an address falls inside the range.
    ///
    /// Addresses are compared as big-endian 32-bit values.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let ip = u32::from(ip);
        ip >= u32::from(self.begin) && ip <= u32::from(self.end)
    }

    /// Classify a textual address.
    ///
    /// Anything that is not a dotted-quad IPv4 address (IPv6 included)
    /// is never internal.
    pub fn contains_str(&self, ip: &str) -> bool {
        ip.parse::<Ipv4Addr>()
            .map(|ip| self.contains(ip))
            .unwrap_or(false)
    }
}

impl Default for InternalNetwork {
    /// The `10.0.0.0/8` private block.
    fn default() -> Self {
        Self {
            begin: Ipv4Addr::new(10, 0, 0, 0),
            end: Ipv4Addr::new(10, 255, 255, 255),
        }
    }
}

impl std::fmt::Display for InternalNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// The parsed display window of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionalPeriod {
    pub start: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
}

impl PromotionalPeriod {
    /// Parse both timestamps, expiration first.
    ///
    /// Returns None if either one does not parse.
    pub fn parse(start: &str, expiration: &str) -> Option<Self> {
        let expiration = parse_timestamp(expiration)?;
        let start = parse_timestamp(start)?;
        Some(Self { start, expiration })
    }

    /// Check whether `now` lies inside the period.
    ///
    /// Both boundaries are exclusive. Internal callers skip the start
    /// check and only need `now` before the expiration.
    pub fn contains(&self, now: DateTime<Utc>, internal: bool) -> bool {
        if internal && now < self.expiration {
            return true;
        }
        now > self.start && now < self.expiration
    }
}
