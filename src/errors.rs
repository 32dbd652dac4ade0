use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BanditError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Arm {arm_id} out of range for a bandit with {n_arms} arms")]
    ArmOutOfRange { arm_id: usize, n_arms: usize },
}

impl BanditError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        BanditError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Cannot read config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
