use super::agent::{Agent, AgentStats, PlayResult};
use super::estimates::{argmax, incremental_mean};

use crate::bandit::Bandit;
use crate::errors::BanditError;

/// Pulls every arm `num_trials` times in round-robin order, then commits to
/// the arm with the best observed average for the rest of the run.
#[derive(Debug)]
pub struct ExploreThenCommit<'a> {
    bandit: &'a Bandit,
    budget: u64,
    attempts: u64,
    pulls: Vec<u64>,
    values: Vec<f64>,
    step: u64,
}

impl<'a> ExploreThenCommit<'a> {
    pub fn new(bandit: &'a Bandit, num_trials: u64) -> Result<Self, BanditError> {
        let n_arms = bandit.n_arms();
        let budget = num_trials.checked_mul(n_arms as u64).ok_or_else(|| {
            BanditError::invalid(
                "num_trials",
                num_trials as f64,
                "exploration budget overflows",
            )
        })?;

        Ok(Self {
            bandit,
            budget,
            attempts: 0,
            pulls: vec![0; n_arms],
            values: vec![0.0; n_arms],
            step: 0,
        })
    }

    pub fn is_exploring(&self) -> bool {
        self.attempts < self.budget
    }

    fn select_arm(&self) -> usize {
        if self.is_exploring() {
            (self.attempts % self.values.len() as u64) as usize
        } else {
            argmax(&self.values).unwrap_or_default()
        }
    }
}

impl Agent for ExploreThenCommit<'_> {
    fn name(&self) -> &'static str {
        "ExploreThenCommit"
    }

    fn bandit(&self) -> &Bandit {
        self.bandit
    }

    fn step(&self) -> u64 {
        self.step
    }

    fn play(&mut self) -> Result<PlayResult, BanditError> {
        let selected_arm = self.select_arm();
        let reward = self.bandit.pull(selected_arm)?;

        self.pulls[selected_arm] += 1;
        self.values[selected_arm] = incremental_mean(
            self.values[selected_arm],
            reward,
            self.pulls[selected_arm],
        );
        self.attempts += 1;
        self.step += 1;

        Ok(PlayResult {
            selected_arm,
            reward,
        })
    }

    fn stats(&self) -> AgentStats {
        AgentStats::new(self.step, &self.pulls, &self.values)
    }
}
