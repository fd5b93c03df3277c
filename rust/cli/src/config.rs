use pokerhand_engine::game::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "POKERHAND_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub variant: Variant,
    pub seed: Option<u64>,
    pub rounds: u64,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub variant: ValueSource,
    pub seed: ValueSource,
    pub rounds: ValueSource,
    pub verbose: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            variant: ValueSource::Default,
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
            verbose: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::Holdem,
            seed: None,
            rounds: 1_000,
            verbose: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Loads the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Loads the configuration using `env` to look up variables: defaults, then
/// the file named by `POKERHAND_CONFIG`, then `POKERHAND_*` overrides.
pub fn load_with_sources_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.variant {
            cfg.variant = v;
            sources.variant = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.verbose {
            cfg.verbose = v;
            sources.verbose = ValueSource::File;
        }
    }

    if let Some(variant) = var("POKERHAND_VARIANT") {
        cfg.variant = variant.parse().map_err(ConfigError::Invalid)?;
        sources.variant = ValueSource::Env;
    }
    if let Some(seed) = var("POKERHAND_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(rounds) = var("POKERHAND_ROUNDS") {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?;
        sources.rounds = ValueSource::Env;
    }
    if let Some(verbose) = var("POKERHAND_VERBOSE") {
        cfg.verbose =
            parse_bool(&verbose).ok_or_else(|| ConfigError::Invalid("Invalid verbose".into()))?;
        sources.verbose = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    variant: Option<Variant>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u64>,
    #[serde(default)]
    verbose: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >0".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
