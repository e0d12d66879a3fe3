//! Configuration system: TOML file + env var overrides + defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TvError};
use crate::discovery::{ChannelDiscovery, FixedDiscovery, RandomDiscovery};
use crate::set::TvSet;

/// Full simulator configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub tv: TvConfig,
    pub discovery: DiscoveryConfig,
}

/// The simulated set itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TvConfig {
    pub model: String,
    pub channel_capacity: usize,
}

impl Default for TvConfig {
    fn default() -> Self {
        Self {
            model: "Generic TV".to_string(),
            channel_capacity: 8,
        }
    }
}

/// Channel discovery behavior.
///
/// `fixed_channels` pins discovery to a deterministic count; otherwise a
/// random draw is used, reproducible when `seed` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub seed: Option<u64>,
    pub fixed_channels: Option<usize>,
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> PathBuf {
        env::var_os("HOME").map_or_else(
            || PathBuf::from("tvsim.toml"),
            |home| PathBuf::from(home).join(".config/tvsim/config.toml"),
        )
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default
    /// path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| TvError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(TvError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `TVSIM_*` environment overrides on top of the file values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| env::var(name).ok())
    }

    fn apply_overrides_from(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(model) = get("TVSIM_MODEL") {
            self.tv.model = model;
        }
        if let Some(raw) = get("TVSIM_CHANNEL_CAPACITY") {
            self.tv.channel_capacity = parse_env("TVSIM_CHANNEL_CAPACITY", &raw)?;
        }
        if let Some(raw) = get("TVSIM_SEED") {
            self.discovery.seed = Some(parse_env("TVSIM_SEED", &raw)?);
        }
        if let Some(raw) = get("TVSIM_FIXED_CHANNELS") {
            self.discovery.fixed_channels = Some(parse_env("TVSIM_FIXED_CHANNELS", &raw)?);
        }
        Ok(())
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.tv.channel_capacity == 0 {
            return Err(TvError::InvalidConfig {
                details: "tv.channel_capacity must be at least 1".to_string(),
            });
        }

        if let Some(fixed) = self.discovery.fixed_channels
            && fixed >= self.tv.channel_capacity
        {
            return Err(TvError::InvalidConfig {
                details: format!(
                    "discovery.fixed_channels ({fixed}) must be below tv.channel_capacity ({})",
                    self.tv.channel_capacity
                ),
            });
        }

        Ok(())
    }

    /// Build the discovery provider this config describes.
    #[must_use]
    pub fn discovery_provider(&self) -> Box<dyn ChannelDiscovery> {
        match (self.discovery.fixed_channels, self.discovery.seed) {
            (Some(count), _) => Box::new(FixedDiscovery::new(count)),
            (None, Some(seed)) => Box::new(RandomDiscovery::seeded(seed)),
            (None, None) => Box::new(RandomDiscovery::new()),
        }
    }

    /// Construct the configured set.
    pub fn build_set(&self) -> Result<TvSet> {
        TvSet::with_discovery(
            &self.tv.model,
            self.tv.channel_capacity,
            self.discovery_provider(),
        )
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| TvError::InvalidConfig {
        details: format!("env override {name} has invalid value {raw:?}"),
    })
}
