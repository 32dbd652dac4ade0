use crate::bandit::Bandit;
use crate::errors::BanditError;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayResult {
    pub selected_arm: usize,
    pub reward: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentStats {
    pub step: u64,
    pub arms: Vec<ArmStats>,
}

impl AgentStats {
    pub(crate) fn new(step: u64, pulls: &[u64], values: &[f64]) -> Self {
        Self {
            step,
            arms: pulls
                .iter()
                .zip(values)
                .map(|(&pulls, &value)| ArmStats { pulls, value })
                .collect(),
        }
    }
}

/// A decision strategy interacting with a bandit it borrows.
///
/// `play` selects an arm, pulls it, updates the estimates with the observed
/// reward and advances the step counter. Implementations only ever call
/// `Bandit::pull` and `Bandit::n_arms`.
pub trait Agent {
    fn name(&self) -> &'static str;
    fn bandit(&self) -> &Bandit;
    fn step(&self) -> u64;
    fn play(&mut self) -> Result<PlayResult, BanditError>;
    fn stats(&self) -> AgentStats;
}
