// src/config.rs
//! Service configuration: TOML file plus environment overrides.
//!
//! ```toml
//! [detector]
//! min_chars = 50
//! max_batch = 32
//! debug_routes = false
//! ```
//!
//! Lookup: `$DETECTOR_CONFIG_PATH`, else `config/detector.toml`. A missing file
//! yields defaults; a malformed one is an error. Env overrides win over the
//! file: `DETECTOR_MIN_CHARS`, `DETECTOR_MAX_BATCH`, `DEBUG_ROUTES=1`.
//!
//! Ensemble weights and band tables are compiled in and not configurable.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analyze::MIN_TEXT_CHARS;

pub const DEFAULT_CONFIG_PATH: &str = "config/detector.toml";

pub const ENV_CONFIG_PATH: &str = "DETECTOR_CONFIG_PATH";
pub const ENV_MIN_CHARS: &str = "DETECTOR_MIN_CHARS";
pub const ENV_MAX_BATCH: &str = "DETECTOR_MAX_BATCH";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

const DEFAULT_MAX_BATCH: usize = 32;

fn default_min_chars() -> usize {
    MIN_TEXT_CHARS
}
fn default_max_batch() -> usize {
    DEFAULT_MAX_BATCH
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DetectorConfig {
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
    #[serde(default)]
    pub debug_routes: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            max_batch: default_max_batch(),
            debug_routes: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigRoot {
    #[serde(default)]
    detector: DetectorConfig,
}

impl DetectorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let root: ConfigRoot = toml::from_str(s).context("parsing detector config")?;
        Ok(root.detector.sanitized())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading detector config from {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// File (if present) + env overrides.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = if path.exists() {
            let cfg = Self::load_from(&path)?;
            info!(path = %path.display(), "detector config loaded");
            cfg
        } else {
            info!(path = %path.display(), "no detector config file; using defaults");
            Self::default()
        };

        if let Some(v) = parse_usize_env(ENV_MIN_CHARS) {
            cfg.min_chars = v;
        }
        if let Some(v) = parse_usize_env(ENV_MAX_BATCH) {
            cfg.max_batch = v;
        }
        if std::env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1") {
            cfg.debug_routes = true;
        }
        Ok(cfg.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.min_chars = self.min_chars.max(1);
        self.max_batch = self.max_batch.max(1);
        self
    }
}

fn parse_usize_env(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring non-numeric env override");
            None
        }
    }
}
