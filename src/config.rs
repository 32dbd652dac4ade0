use crate::agents::AgentType;
use crate::bandit::ArmGenerator;

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExperimentConfig {
    pub num_rounds: usize,
    pub num_seeds: u64,
    pub log_every: Option<u64>,
    #[serde(default)]
    pub include_series: bool,
}

#[derive(Debug, Deserialize)]
pub struct BanditConfig {
    pub n_arms: usize,
    pub arms: Box<dyn ArmGenerator>,
}

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub policy: AgentType,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub experiment: ExperimentConfig,
    pub bandit: BanditConfig,
    pub agents: Vec<AgentConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(File::with_name("config"))
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let builder = Config::builder()
            .add_source(source)
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }
}
