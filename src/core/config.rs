//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.explainer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Strategy;
use crate::core::collector::ValidationPolicy;
use crate::core::request::Difficulty;
use crate::explain::strategies::placeholder::DEFAULT_DELAY;
use crate::explain::strategies::remote::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExplainerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub strategy: Option<Strategy>,
    /// Reject submissions with no difficulty checked. Defaults to true for
    /// the remote strategy and false for the placeholder.
    pub require_difficulty: Option<bool>,
    pub default_difficulty: Option<Difficulty>,
    /// 0 disables the timeout.
    pub timeout_secs: Option<u64>,
    /// Jump instead of animating when the result is scrolled into view.
    pub reduce_motion: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaceholderConfig {
    pub delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub strategy: Strategy,
    pub base_url: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub placeholder_delay: Duration,
    pub policy: ValidationPolicy,
    /// Radio checked when the form first opens.
    pub initial_difficulty: Option<Difficulty>,
    pub reduce_motion: bool,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub strategy: Option<Strategy>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.explainer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".explainer").join("config.toml"))
}

/// Load config from `explicit` or, if not given, `~/.explainer/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `ExplainerConfig::default()`. An explicit path must exist. A file
/// that exists but is malformed returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<ExplainerConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ExplainerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ExplainerConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<ExplainerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ExplainerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Explainer Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# strategy = "remote"                # "remote" or "placeholder"
# require_difficulty = true          # default: true for remote, false for placeholder
# default_difficulty = "beginner"    # "beginner", "intermediate", "advanced"
# timeout_secs = 120                 # 0 waits forever
# reduce_motion = false              # true jumps to results instead of scrolling

# [remote]
# base_url = "http://localhost:8000" # Or set EXPLAINER_BASE_URL env var
# endpoint = "/explain"

# [placeholder]
# delay_ms = 800
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ExplainerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by the caller.
pub fn resolve_with_env(
    config: &ExplainerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Strategy: CLI → env → config → default
    let strategy = cli
        .strategy
        .or_else(|| {
            env("EXPLAINER_STRATEGY").and_then(|s| match Strategy::from_str(&s, true) {
                Ok(strategy) => Some(strategy),
                Err(e) => {
                    warn!("Ignoring EXPLAINER_STRATEGY={:?}: {}", s, e);
                    None
                }
            })
        })
        .or(config.general.strategy)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("EXPLAINER_BASE_URL"))
        .or_else(|| config.remote.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let endpoint = config
        .remote
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Timeout: CLI → env → config → default
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            env("EXPLAINER_TIMEOUT_SECS").and_then(|s| match s.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    warn!("Ignoring EXPLAINER_TIMEOUT_SECS={:?}: {}", s, e);
                    None
                }
            })
        })
        .or(config.general.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let timeout = (timeout_secs > 0).then_some(Duration::from_secs(timeout_secs));

    let placeholder_delay = config
        .placeholder
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DELAY);

    // The standalone form ships with a radio pre-checked; the served one doesn't.
    let require_difficulty = config
        .general
        .require_difficulty
        .unwrap_or(strategy == Strategy::Remote);
    let default_difficulty = config.general.default_difficulty.unwrap_or_default();
    let (policy, initial_difficulty) = if require_difficulty {
        (
            ValidationPolicy::RequireSelection,
            config.general.default_difficulty,
        )
    } else {
        (
            ValidationPolicy::AssumeDefault(default_difficulty),
            Some(default_difficulty),
        )
    };

    ResolvedConfig {
        strategy,
        base_url,
        endpoint,
        timeout,
        placeholder_delay,
        policy,
        initial_difficulty,
        reduce_motion: config.general.reduce_motion.unwrap_or(false),
    }
}
