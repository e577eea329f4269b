//! Layered configuration: defaults, then a TOML file named by
//! `FIVEDRAW_CONFIG`, then `FIVEDRAW_*` environment variables. Command-line
//! flags are applied on top by each command.

use std::fs;

use fivedraw_ai::DrawStyle;
use fivedraw_engine::config::{
    TableConfig, DEFAULT_ANTE, DEFAULT_RAISE_INCREMENT, MAX_SEATS, STARTING_BALANCE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_CONFIG: &str = "FIVEDRAW_CONFIG";
pub const ENV_SEED: &str = "FIVEDRAW_SEED";
pub const ENV_ANTE: &str = "FIVEDRAW_ANTE";
pub const ENV_OPPONENTS: &str = "FIVEDRAW_OPPONENTS";

/// Most CPU seats next to the human.
pub const MAX_OPPONENTS: usize = MAX_SEATS - 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ante: u32,
    pub raise_increment: u32,
    pub starting_balance: u32,
    pub seed: Option<u64>,
    pub opponents: usize,
    pub draw_style: DrawStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ante: DEFAULT_ANTE,
            raise_increment: DEFAULT_RAISE_INCREMENT,
            starting_balance: STARTING_BALANCE,
            seed: None,
            opponents: 3,
            draw_style: DrawStyle::StandPat,
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            ante: self.ante,
            raise_increment: self.raise_increment,
            starting_balance: self.starting_balance,
        }
    }
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
    pub ante: ValueSource,
    pub raise_increment: ValueSource,
    pub starting_balance: ValueSource,
    pub seed: ValueSource,
    pub opponents: ValueSource,
    pub draw_style: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            ante: ValueSource::Default,
            raise_increment: ValueSource::Default,
            starting_balance: ValueSource::Default,
            seed: ValueSource::Default,
            opponents: ValueSource::Default,
            draw_style: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.ante {
            cfg.ante = v;
            sources.ante = ValueSource::File;
        }
        if let Some(v) = f.raise_increment {
            cfg.raise_increment = v;
            sources.raise_increment = ValueSource::File;
        }
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.draw_style {
            cfg.draw_style = v.parse().map_err(ConfigError::Invalid)?;
            sources.draw_style = ValueSource::File;
        }
        tracing::debug!(path = %path, "config file applied");
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ante) = std::env::var(ENV_ANTE)
        && !ante.is_empty()
    {
        cfg.ante = ante
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid ante".into()))?;
        sources.ante = ValueSource::Env;
    }
    if let Ok(opp) = std::env::var(ENV_OPPONENTS)
        && !opp.is_empty()
    {
        cfg.opponents = opp
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid opponents".into()))?;
        sources.opponents = ValueSource::Env;
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
    ante: Option<u32>,
    #[serde(default)]
    raise_increment: Option<u32>,
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opponents: Option<usize>,
    #[serde(default)]
    draw_style: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    validate_opponents(cfg.opponents)
}

pub fn validate_opponents(opponents: usize) -> Result<(), ConfigError> {
    if !(1..=MAX_OPPONENTS).contains(&opponents) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: opponents must be 1-{}",
            MAX_OPPONENTS
        )));
    }
    Ok(())
}
