use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    system_conf,
};

/// Answers whether a domain publishes at least one MX record.
///
/// Implementations must never fail: any resolution problem is reported as
/// `false`. The HTTP layer only holds a `dyn MxLookup`, so tests can swap in a
/// fake without touching the network.
#[async_trait]
pub trait MxLookup: Send + Sync {
    async fn has_mx_records(&self, domain: &str) -> bool;
}

/// Tuning for [`DnsMxLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsSettings {
    /// Per-query timeout handed to the resolver.
    pub query_timeout: Duration,
    /// Resolver attempts per query.
    pub attempts: usize,
    /// Hard ceiling on one whole lookup, retries included.
    pub deadline: Duration,
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(2),
            attempts: 2,
            deadline: Duration::from_secs(5),
        }
    }
}

/// MX lookup backed by the async trust-dns resolver.
pub struct DnsMxLookup {
    resolver: TokioAsyncResolver,
    deadline: Duration,
}

impl DnsMxLookup {
    /// Creates a resolver from the host's DNS configuration.
    ///
    /// Falls back to the resolver's built-in upstreams when the system
    /// configuration cannot be read (e.g. no `/etc/resolv.conf` in a
    /// container).
    pub fn new(settings: DnsSettings) -> Self {
        let (config, mut opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!("Falling back to default DNS upstreams: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        opts.timeout = settings.query_timeout;
        opts.attempts = settings.attempts;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
            deadline: settings.deadline,
        }
    }
}

#[async_trait]
impl MxLookup for DnsMxLookup {
    async fn has_mx_records(&self, domain: &str) -> bool {
        match tokio::time::timeout(self.deadline, self.resolver.mx_lookup(domain)).await {
            Ok(Ok(records)) => {
                let count = records.iter().count();
                debug!("{domain}: {count} MX record(s)");
                count > 0
            }
            Ok(Err(e)) => {
                warn!("MX lookup for {domain} failed: {e}");
                false
            }
            Err(_) => {
                warn!(
                    "MX lookup for {domain} exceeded {}ms deadline",
                    self.deadline.as_millis()
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = DnsSettings::default();
        assert_eq!(settings.query_timeout, Duration::from_secs(2));
        assert_eq!(settings.attempts, 2);
        assert!(settings.deadline >= settings.query_timeout);
    }

    #[tokio::test]
    async fn reserved_tld_has_no_mx() {
        // `.invalid` is reserved (RFC 2606) and never resolves.
        let lookup = DnsMxLookup::new(DnsSettings {
            deadline: Duration::from_secs(3),
            ..DnsSettings::default()
        });
        assert!(!lookup.has_mx_records("nonexistent.invalid").await);
    }

    #[tokio::test]
    async fn zero_deadline_reports_false() {
        let lookup = DnsMxLookup::new(DnsSettings {
            deadline: Duration::ZERO,
            ..DnsSettings::default()
        });
        assert!(!lookup.has_mx_records("example.com").await);
    }

    #[tokio::test]
    #[ignore] // needs outbound DNS
    async fn well_known_domain_has_mx() {
        let lookup = DnsMxLookup::new(DnsSettings::default());
        assert!(lookup.has_mx_records("gmail.com").await);
    }
}
