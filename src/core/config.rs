//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.talentboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TalentboardConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub file: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub wide_layout_columns: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SOURCE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Terminal width at which the list and detail panel sit side by side.
pub const DEFAULT_WIDE_LAYOUT_COLUMNS: u16 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where programs are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: SourceLocation,
    pub timeout_secs: u64,
    pub wide_layout_columns: u16,
}

/// CLI overrides (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub source_url: Option<String>,
    pub source_file: Option<PathBuf>,
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

/// Returns the path to `~/.talentboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".talentboard").join("config.toml"))
}

/// Load config from `~/.talentboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TalentboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TalentboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TalentboardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TalentboardConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TalentboardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TalentboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Talentboard Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# url = "http://localhost:8080/api"   # Or set TALENTBOARD_SOURCE_URL
# file = "programs.json"              # Local JSON file; wins over url. Or TALENTBOARD_SOURCE_FILE
# timeout_secs = 30

# [layout]
# wide_layout_columns = 100           # Or TALENTBOARD_WIDE_LAYOUT_COLUMNS
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TalentboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment lookup injected.
pub fn resolve_with_env(
    config: &TalentboardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // A file given anywhere at a level beats a URL at the same level;
    // a higher level beats a lower one regardless of kind.
    let source = if let Some(file) = &cli.source_file {
        SourceLocation::File(file.clone())
    } else if let Some(url) = &cli.source_url {
        SourceLocation::Http(url.clone())
    } else if let Some(file) = env("TALENTBOARD_SOURCE_FILE") {
        SourceLocation::File(PathBuf::from(file))
    } else if let Some(url) = env("TALENTBOARD_SOURCE_URL") {
        SourceLocation::Http(url)
    } else if let Some(file) = &config.source.file {
        SourceLocation::File(PathBuf::from(file))
    } else {
        SourceLocation::Http(
            config
                .source
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
        )
    };

    let wide_layout_columns = env("TALENTBOARD_WIDE_LAYOUT_COLUMNS")
        .and_then(|v| match v.parse() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Ignoring TALENTBOARD_WIDE_LAYOUT_COLUMNS={:?}: {}", v, e);
                None
            }
        })
        .or(config.layout.wide_layout_columns)
        .unwrap_or(DEFAULT_WIDE_LAYOUT_COLUMNS);

    ResolvedConfig {
        source,
        timeout_secs: config.source.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        wide_layout_columns,
    }
}
