use crate::agents::Agent;
use crate::errors::BanditError;

use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationSummary {
    pub final_regret: f64,
    pub final_reward: f64,
    pub cumulative_regret: Vec<f64>,
    pub cumulative_reward: Vec<f64>,
}

impl EvaluationSummary {
    pub fn num_rounds(&self) -> usize {
        self.cumulative_regret.len()
    }

    pub fn average_regret(&self) -> f64 {
        match self.num_rounds() {
            0 => 0.0,
            n => self.final_regret / n as f64,
        }
    }

    pub fn average_reward(&self) -> f64 {
        match self.num_rounds() {
            0 => 0.0,
            n => self.final_reward / n as f64,
        }
    }
}

/// Runs an agent against its own bandit and tracks regret online.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    log_every: Option<u64>,
}

impl Evaluator {
    pub fn new(log_every: Option<u64>) -> Self {
        Self {
            log_every: log_every.filter(|&every| every > 0),
        }
    }

    /// Plays `num_rounds` rounds. Index `i` of each sequence holds the totals
    /// after round `i + 1`. Any error from the agent aborts the evaluation.
    pub fn evaluate(
        &self,
        agent: &mut dyn Agent,
        num_rounds: usize,
    ) -> Result<EvaluationSummary, BanditError> {
        let mut regret = 0.0;
        let mut total_reward = 0.0;
        let mut cumulative_regret = Vec::with_capacity(num_rounds);
        let mut cumulative_reward = Vec::with_capacity(num_rounds);

        for round in 1..=num_rounds {
            let result = agent.play()?;
            let instant_regret = agent.bandit().regret(result.selected_arm)?;

            regret += instant_regret;
            total_reward += result.reward;
            cumulative_regret.push(regret);
            cumulative_reward.push(total_reward);

            if self.log_every.is_some_and(|every| round as u64 % every == 0) {
                debug!(
                    agent = agent.name(),
                    step = agent.step(),
                    round,
                    instant_regret,
                    cumulative_regret = regret,
                    instant_reward = result.reward,
                    cumulative_reward = total_reward,
                    selected_arm = result.selected_arm,
                    average_regret = regret / round as f64,
                    average_reward = total_reward / round as f64,
                    "Evaluation progress"
                );
            }
        }

        let summary = EvaluationSummary {
            final_regret: regret,
            final_reward: total_reward,
            cumulative_regret,
            cumulative_reward,
        };

        info!(
            agent = agent.name(),
            num_rounds,
            final_regret = summary.final_regret,
            final_reward = summary.final_reward,
            average_regret = summary.average_regret(),
            average_reward = summary.average_reward(),
            "Evaluation finished"
        );

        Ok(summary)
    }
}
