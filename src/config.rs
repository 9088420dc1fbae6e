use crate::domain::value_objects::InternalNetwork;
use std::net::Ipv4Addr;

const DEFAULT_INTERNAL_IP_BEGIN: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 0);
const DEFAULT_INTERNAL_IP_END: Ipv4Addr = Ipv4Addr::new(10, 255, 255, 255);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Preview access range (inclusive)
    pub internal_ip_begin: Ipv4Addr,
    pub internal_ip_end: Ipv4Addr,
    /// Verbose logging requested; read by the host when it installs its subscriber
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internal_ip_begin: DEFAULT_INTERNAL_IP_BEGIN,
            internal_ip_end: DEFAULT_INTERNAL_IP_END,
            debug: false,
        }
    }
}

impl Config {
    pub fn internal_network(&self) -> InternalNetwork {
        InternalNetwork::new(self.internal_ip_begin, self.internal_ip_end)
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_config_from<F>(lookup: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let internal_ip_begin = parse_ip(
        &lookup,
        "BANNERS_INTERNAL_IP_BEGIN",
        DEFAULT_INTERNAL_IP_BEGIN,
    );

    let internal_ip_end = parse_ip(&lookup, "BANNERS_INTERNAL_IP_END", DEFAULT_INTERNAL_IP_END);

    let debug = lookup("DEBUG").is_some();

    if u32::from(internal_ip_begin) > u32::from(internal_ip_end) {
        anyhow::bail!(
            "internal IP range is inverted: {} > {}",
            internal_ip_begin,
            internal_ip_end
        );
    }

    Ok(Config {
        internal_ip_begin,
        internal_ip_end,
        debug,
    })
}

fn parse_ip<F>(lookup: &F, key: &str, default: Ipv4Addr) -> Ipv4Addr
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
