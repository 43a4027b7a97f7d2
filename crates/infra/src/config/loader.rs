//! Configuration loader
//!
//! Builds the application configuration from defaults, an optional file and
//! environment variables.
//!
//! ## Loading Strategy
//! 1. Start from the built-in defaults
//! 2. Overlay a config file: the explicit path if given, otherwise the first
//!    probed file (if any)
//! 3. Overlay any `BOARDCOUNT_*` environment variables
//! 4. Validate the result
//!
//! Files may be JSON or TOML and may be partial; missing fields keep their
//! defaults.
//!
//! ## Environment Variables
//! - `BOARDCOUNT_STORAGE_BACKEND`: `sqlite`, `json` or `memory`
//! - `BOARDCOUNT_STORAGE_PATH`: Database or JSON file path
//! - `BOARDCOUNT_STORAGE_POOL_SIZE`: SQLite connection pool size
//! - `BOARDCOUNT_ROSTER_KEY`: Storage key for the roster
//! - `BOARDCOUNT_METADATA_KEY`: Storage key for report metadata
//! - `BOARDCOUNT_BASE_CAPACITY`: Slots created on first run
//! - `BOARDCOUNT_PAGE_CAPACITY`: Slots per printed page (even)
//! - `BOARDCOUNT_ACTIVATION_POLICY`: `toggle` or `force`
//! - `BOARDCOUNT_NET_MEAL_OFFSET`: Added to the active count for net meal
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./boardcount.json` or `./boardcount.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use boardcount_domain::{BoardCountError, Config, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["boardcount.json", "boardcount.toml", "config.json", "config.toml"];

/// Load configuration with the layered strategy described above
///
/// # Errors
/// Returns `BoardCountError::Config` if:
/// - An explicit `path` does not exist or cannot be parsed
/// - A probed file cannot be parsed
/// - An environment variable has an invalid value
/// - The merged configuration fails validation
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    let overridden = apply_env_overrides(&mut config)?;
    if overridden > 0 {
        tracing::info!(overridden, "Applied configuration from environment variables");
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from defaults plus environment variables only
///
/// # Errors
/// Returns `BoardCountError::Config` if a variable has an invalid value or the
/// result fails validation.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `BoardCountError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BoardCountError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BoardCountError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BoardCountError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BoardCountError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BoardCountError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(BoardCountError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Overlay every `BOARDCOUNT_*` variable that is set onto `config`
///
/// Returns how many variables were applied.
fn apply_env_overrides(config: &mut Config) -> Result<usize> {
    let mut applied = 0;
    let mut note = |hit: bool| applied += usize::from(hit);

    note(env_parse("BOARDCOUNT_STORAGE_BACKEND", &mut config.storage.backend)?);
    note(env_string("BOARDCOUNT_STORAGE_PATH", &mut config.storage.path));
    note(env_parse("BOARDCOUNT_STORAGE_POOL_SIZE", &mut config.storage.pool_size)?);
    note(env_string("BOARDCOUNT_ROSTER_KEY", &mut config.storage.roster_key));
    note(env_string("BOARDCOUNT_METADATA_KEY", &mut config.storage.metadata_key));
    note(env_parse("BOARDCOUNT_BASE_CAPACITY", &mut config.roster.base_capacity)?);
    note(env_parse("BOARDCOUNT_PAGE_CAPACITY", &mut config.roster.page_capacity)?);
    note(env_parse("BOARDCOUNT_ACTIVATION_POLICY", &mut config.roster.activation_policy)?);
    note(env_parse("BOARDCOUNT_NET_MEAL_OFFSET", &mut config.roster.net_meal_offset)?);

    Ok(applied)
}

/// Get a non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_string(key: &str, target: &mut String) -> bool {
    match env_var(key) {
        Some(value) => {
            *target = value;
            true
        }
        None => false,
    }
}

/// Parse an environment variable into `target`
///
/// # Errors
/// Returns `BoardCountError::Config` naming the variable if parsing fails.
fn env_parse<T>(key: &str, target: &mut T) -> Result<bool>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = env_var(key) else {
        return Ok(false);
    };
    *target = raw
        .trim()
        .parse()
        .map_err(|e| BoardCountError::Config(format!("Invalid value for {}: {}", key, e)))?;
    Ok(true)
}
