use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub feedback_max_len: usize,
    pub review_page_size: usize,
    /// Reviews kept for listing. Older ones are dropped but stay counted in
    /// the summary.
    pub max_stored_reviews: usize,
    pub cors_max_age: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(var)
    }

    /// Builds the config from any key lookup, the environment in production.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            port: try_load(&lookup, "SLIDE_PORT", "5000")?,
            feedback_max_len: try_load(&lookup, "FEEDBACK_MAX_LEN", "1000")?,
            review_page_size: try_load(&lookup, "REVIEW_PAGE_SIZE", "20")?,
            max_stored_reviews: try_load(&lookup, "MAX_STORED_REVIEWS", "10000")?,
            cors_max_age: Duration::from_secs(try_load(&lookup, "CORS_MAX_AGE_SECS", "3600")?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            feedback_max_len: 1000,
            review_page_size: 20,
            max_stored_reviews: 10_000,
            cors_max_age: Duration::from_secs(60 * 60),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
