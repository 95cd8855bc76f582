//! Layered configuration: defaults, then a TOML file named by
//! `HEADSUP_CONFIG`, then `HEADSUP_*` environment variables. Command-line
//! flags are applied on top by the commands themselves.

use serde::{Deserialize, Serialize};
use std::fs;

use headsup_ai::POLICY_NAMES;
use headsup_engine::player::STARTING_STACK;

pub const CONFIG_ENV: &str = "HEADSUP_CONFIG";
pub const SEED_ENV: &str = "HEADSUP_SEED";
pub const STARTING_STACK_ENV: &str = "HEADSUP_STARTING_STACK";
pub const OPPONENT_ENV: &str = "HEADSUP_OPPONENT";
pub const OPPONENT_DELAY_ENV: &str = "HEADSUP_OPPONENT_DELAY_MS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub seed: Option<u64>,
    pub opponent: String,
    pub opponent_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            seed: None,
            opponent: "reference".into(),
            opponent_delay_ms: 1000,
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
    pub starting_stack: ValueSource,
    pub seed: ValueSource,
    pub opponent: ValueSource,
    pub opponent_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            seed: ValueSource::Default,
            opponent: ValueSource::Default,
            opponent_delay_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.opponent {
            cfg.opponent = v;
            sources.opponent = ValueSource::File;
        }
        if let Some(v) = f.opponent_delay_ms {
            cfg.opponent_delay_ms = v;
            sources.opponent_delay_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STARTING_STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting stack: {}", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(OPPONENT_ENV)
        && !name.is_empty()
    {
        cfg.opponent = name;
        sources.opponent = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var(OPPONENT_DELAY_ENV)
        && !delay.is_empty()
    {
        cfg.opponent_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid opponent delay: {}", delay)))?;
        sources.opponent_delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opponent: Option<String>,
    #[serde(default)]
    opponent_delay_ms: Option<u64>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if !POLICY_NAMES.contains(&cfg.opponent.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown opponent '{}' (expected one of: {})",
            cfg.opponent,
            POLICY_NAMES.join(", ")
        )));
    }
    Ok(())
}
