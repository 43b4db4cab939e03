//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.copang/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CopangConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub animations: Option<bool>,
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SplashConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 250;
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 3000;
pub const DEFAULT_LOG_FILE: &str = "copang.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Zero when animations are disabled.
    pub transition: Duration,
    pub splash_delay: Duration,
    pub log_file: PathBuf,
}

/// Values taken from CLI flags. `None` / `false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub no_animations: bool,
    pub transition_ms: Option<u64>,
    pub splash_delay_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
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

/// Returns the path to `~/.copang/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".copang").join("config.toml"))
}

/// Load config from `~/.copang/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CopangConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CopangConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CopangConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CopangConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CopangConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CopangConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Copang Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [navigation]
# animations = true          # false makes every transition instant
# transition_ms = 250        # Or set COPANG_TRANSITION_MS

# [splash]
# delay_ms = 3000            # Or set COPANG_SPLASH_DELAY_MS

# [logging]
# file = "copang.log"        # Or set COPANG_LOG_FILE
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
pub fn resolve(config: &CopangConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &CopangConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env_ms = |key: &str| {
        env(key).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", key, raw, e);
                None
            }
        })
    };

    // Transition: CLI → env → config → default, then the animations switch
    let transition_ms = cli
        .transition_ms
        .or_else(|| env_ms("COPANG_TRANSITION_MS"))
        .or(config.navigation.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);
    let animations = !cli.no_animations && config.navigation.animations.unwrap_or(true);
    let transition = if animations {
        Duration::from_millis(transition_ms)
    } else {
        Duration::ZERO
    };

    // Splash delay: CLI → env → config → default
    let splash_delay_ms = cli
        .splash_delay_ms
        .or_else(|| env_ms("COPANG_SPLASH_DELAY_MS"))
        .or(config.splash.delay_ms)
        .unwrap_or(DEFAULT_SPLASH_DELAY_MS);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("COPANG_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        transition,
        splash_delay: Duration::from_millis(splash_delay_ms),
        log_file,
    }
}
