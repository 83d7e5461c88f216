// src/config.rs

use std::{env, ops::RangeInclusive, path::PathBuf, time::Duration};

use thiserror::Error;
use url::Url;

pub const DEFAULT_DATA_DIR: &str = "data/nfl";
pub const DEFAULT_OUTPUT_NAME: &str = "nfl_player_data.json";
pub const DEFAULT_BASE_URL: &str = "https://www.pro-football-reference.com/";
pub const DEFAULT_FIRST_YEAR: u16 = 2005;
pub const DEFAULT_LAST_YEAR: u16 = 2024;
pub const DEFAULT_DELAY_SECS: u64 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({message})")]
    Invalid {
        var: &'static str,
        value: String,
        message: String,
    },

    #[error("year range is empty: {first}..={last}")]
    EmptyYearRange { first: u16, last: u16 },
}

/// Runtime settings, read from `NFL_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-season CSV tables.
    pub data_dir: PathBuf,
    /// Consolidated JSON document.
    pub output: PathBuf,
    pub base_url: Url,
    pub first_year: u16,
    pub last_year: u16,
    /// Fixed wait between successive page fetches.
    pub delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("NFL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let output = lookup("NFL_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DEFAULT_OUTPUT_NAME));

        let base_raw = lookup("NFL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_raw).map_err(|e| ConfigError::Invalid {
            var: "NFL_BASE_URL",
            value: base_raw.clone(),
            message: e.to_string(),
        })?;

        let first_year = parse_var(&lookup, "NFL_FIRST_YEAR", DEFAULT_FIRST_YEAR)?;
        let last_year = parse_var(&lookup, "NFL_LAST_YEAR", DEFAULT_LAST_YEAR)?;
        if first_year > last_year {
            return Err(ConfigError::EmptyYearRange {
                first: first_year,
                last: last_year,
            });
        }

        let delay_secs = parse_var(&lookup, "NFL_SCRAPE_DELAY_SECS", DEFAULT_DELAY_SECS)?;

        Ok(Self {
            data_dir,
            output,
            base_url,
            first_year,
            last_year,
            delay: Duration::from_secs(delay_secs),
        })
    }

    pub fn years(&self) -> RangeInclusive<u16> {
        self.first_year..=self.last_year
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            message: e.to_string(),
            value: raw,
        }),
    }
}
