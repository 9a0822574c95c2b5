//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nutriplan/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::currency::Currency;
use crate::core::prompt::DEFAULT_SYSTEM_PROMPT;
use crate::inference::Effort;
use crate::inference::providers::{lmstudio, openrouter};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NutriConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub lmstudio: LmStudioConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
    pub default_model: Option<String>,
    pub max_output_tokens: Option<u32>,
    pub reasoning_effort: Option<Effort>,
    pub currency: Option<Currency>,
    /// Market the prices and ingredients should come from.
    pub region: Option<String>,
    pub default_budget: Option<f64>,
    pub system_prompt: Option<String>,
    pub system_prompt_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LmStudioConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROVIDER: &str = "openrouter";
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
pub const DEFAULT_REGION: &str = "Colombia";
pub const DEFAULT_BUDGET: f64 = 150_000.0;

const CONFIG_DIR: &str = ".nutriplan";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: String,
    pub model_name: String,
    pub max_output_tokens: u32,
    pub effort: Effort,
    pub currency: Currency,
    pub region: String,
    pub default_budget: f64,
    pub system_prompt: String,
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    pub lmstudio_base_url: String,
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub provider: Option<&'a str>,
    pub model: Option<&'a str>,
    pub currency: Option<Currency>,
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

/// Returns the path to `~/.nutriplan/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR).join("config.toml"))
}

/// Load config from `~/.nutriplan/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NutriConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NutriConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(NutriConfig::default());
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<NutriConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NutriConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NutriConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# NutriPlan Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "openrouter"    # "openrouter" or "lmstudio"
# default_model = "google/gemini-2.0-flash-001"
# max_output_tokens = 8192
# reasoning_effort = "auto"          # "high", "medium", "low", "auto", "none"
# currency = "cop"                   # "cop", "usd", "eur", "mxn"
# region = "Colombia"                # Where ingredients are bought
# default_budget = 150000
# system_prompt = "You are an expert nutritionist."
# system_prompt_file = "system.md"   # Path relative to ~/.nutriplan/

# [openrouter]
# api_key = "sk-or-..."              # Or set OPENROUTER_API_KEY env var
# base_url = "https://openrouter.ai/api/v1"

# [lmstudio]
# base_url = "http://localhost:1234/v1"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NutriConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli
        .provider
        .map(str::to_string)
        .or_else(|| env_var("NUTRIPLAN_PROVIDER"))
        .or_else(|| config.general.default_provider.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    // Model: CLI → env → config → default
    let model_name = cli
        .model
        .map(str::to_string)
        .or_else(|| env_var("NUTRIPLAN_MODEL"))
        .or_else(|| config.general.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let currency = cli
        .currency
        .or(config.general.currency)
        .unwrap_or_default();

    let default_budget = match config.general.default_budget {
        Some(budget) if budget.is_finite() && budget > 0.0 => budget,
        Some(budget) => {
            warn!("Ignoring non-positive default_budget {}", budget);
            DEFAULT_BUDGET
        }
        None => DEFAULT_BUDGET,
    };

    // OpenRouter API key: env → config
    let openrouter_api_key =
        env_var("OPENROUTER_API_KEY").or_else(|| config.openrouter.api_key.clone());

    let openrouter_base_url = env_var("OPENROUTER_BASE_URL")
        .or_else(|| config.openrouter.base_url.clone())
        .unwrap_or_else(|| openrouter::DEFAULT_BASE_URL.to_string());

    let lmstudio_base_url = env_var("LM_STUDIO_BASE_URL")
        .or_else(|| config.lmstudio.base_url.clone())
        .unwrap_or_else(|| lmstudio::DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        provider,
        model_name,
        max_output_tokens: config
            .general
            .max_output_tokens
            .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
        effort: config.general.reasoning_effort.unwrap_or_default(),
        currency,
        region: config
            .general
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        default_budget,
        system_prompt: resolve_system_prompt(config),
        openrouter_api_key,
        openrouter_base_url,
        lmstudio_base_url,
    }
}

/// Empty variables count as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Resolves the system prompt: inline wins over file, both win over default.
fn resolve_system_prompt(config: &NutriConfig) -> String {
    if let Some(ref prompt) = config.general.system_prompt {
        return prompt.clone();
    }

    if let Some(ref file) = config.general.system_prompt_file
        && let Some(home) = dirs::home_dir()
    {
        let prompt_path = home.join(CONFIG_DIR).join(file);
        match fs::read_to_string(&prompt_path) {
            Ok(contents) => {
                let trimmed = contents.trim().to_string();
                if !trimmed.is_empty() {
                    info!("Loaded system prompt from {}", prompt_path.display());
                    return trimmed;
                }
                warn!("System prompt file is empty: {}", prompt_path.display());
            }
            Err(e) => {
                warn!(
                    "Failed to read system prompt file {}: {}",
                    prompt_path.display(),
                    e
                );
            }
        }
    }

    DEFAULT_SYSTEM_PROMPT.to_string()
}
