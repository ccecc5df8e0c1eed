//! Runtime settings for the catalog service.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MOVIE_CATALOG_CHANNEL_CAPACITY` | 32 | Queued requests before callers wait |
//! | `MOVIE_CATALOG_POOL_SIZE` | 8 | Queries executing at once |
//! | `MOVIE_CATALOG_QUERY_TIMEOUT_MS` | 5000 | Default per-call deadline |

use std::time::Duration;

use tracing::warn;

use crate::framework::DEFAULT_QUERY_TIMEOUT;

pub const CHANNEL_CAPACITY_VAR: &str = "MOVIE_CATALOG_CHANNEL_CAPACITY";
pub const POOL_SIZE_VAR: &str = "MOVIE_CATALOG_POOL_SIZE";
pub const QUERY_TIMEOUT_VAR: &str = "MOVIE_CATALOG_QUERY_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub channel_capacity: usize,
    pub pool_size: usize,
    pub query_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            pool_size: 8,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source. Missing, unparsable or zero values
    /// keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let positive = |key: &str, default: u64| -> u64 {
            match lookup(key) {
                None => default,
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(value) if value > 0 => value,
                    _ => {
                        warn!(key, value = %raw, default, "Ignoring invalid setting");
                        default
                    }
                },
            }
        };

        Self {
            channel_capacity: positive(CHANNEL_CAPACITY_VAR, defaults.channel_capacity as u64)
                as usize,
            pool_size: positive(POOL_SIZE_VAR, defaults.pool_size as u64) as usize,
            query_timeout: Duration::from_millis(positive(
                QUERY_TIMEOUT_VAR,
                defaults.query_timeout.as_millis() as u64,
            )),
        }
    }
}
