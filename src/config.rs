use crate::validation::DnsSettings;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Raised when an environment variable is present but unparsable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Process configuration, read once at start-up.
///
/// | variable | default |
/// |---|---|
/// | `HOST` | `127.0.0.1` |
/// | `PORT` | `8080` |
/// | `DNS_TIMEOUT_MS` | `2000` |
/// | `DNS_ATTEMPTS` | `2` |
/// | `LOOKUP_DEADLINE_MS` | `5000` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub dns: DnsSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dns: DnsSettings::default(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or(defaults.host);
        let port = parse(get("PORT"), "PORT", "port number")?.unwrap_or(defaults.port);

        let query_timeout =
            parse::<u64>(get("DNS_TIMEOUT_MS"), "DNS_TIMEOUT_MS", "millisecond count")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.dns.query_timeout);
        let attempts = parse(get("DNS_ATTEMPTS"), "DNS_ATTEMPTS", "positive integer")?
            .unwrap_or(defaults.dns.attempts);
        let deadline =
            parse::<u64>(get("LOOKUP_DEADLINE_MS"), "LOOKUP_DEADLINE_MS", "millisecond count")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.dns.deadline);

        Ok(Self {
            host,
            port,
            dns: DnsSettings {
                query_timeout,
                attempts,
                deadline,
            },
        })
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(
    raw: Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        })
    })
    .transpose()
}
