use crate::agents::{AgentStats, AgentType};
use crate::bandit::{ArmGenerator, Bandit};
use crate::config::{AgentConfig, AppConfig, BanditConfig, ExperimentConfig};
use crate::errors::BanditError;
use crate::evaluator::Evaluator;

use rand::{rngs::SmallRng, RngCore, SeedableRng};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub agent_name: String,
    pub agent_type: AgentType,
    pub seed: u64,
    pub bandit_seed: Option<u64>,
    pub bandit_best_arm: usize,
    pub bandit_best_arm_mean: f64,
    pub bandit_arm_means: Vec<f64>,
    pub final_regret: f64,
    pub final_reward: f64,
    pub avg_regret: f64,
    pub avg_reward: f64,
    pub execution_time_secs: f64,
    pub stats: AgentStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_regret: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_reward: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
}

impl MeanStd {
    /// Mean and population standard deviation. `None` for an empty sample.
    pub fn from_sample(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            mean,
            std: variance.sqrt(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentSummary {
    pub agent_name: String,
    pub runs: usize,
    pub avg_regret: MeanStd,
    pub avg_reward: MeanStd,
    pub execution_time_secs: MeanStd,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub runs: Vec<RunReport>,
    pub summaries: Vec<AgentSummary>,
    pub best_agent: Option<String>,
}

/// Bandit and agent streams for one run, both derived from the run seed.
fn derive_seeds(seed: u64) -> (u64, u64) {
    let mut seeder = SmallRng::seed_from_u64(seed);
    (seeder.next_u64(), seeder.next_u64())
}

/// Compares every configured agent over `num_seeds` seeds. Runs are sequential;
/// for a given seed every agent faces the same arms and the same reward stream.
pub struct Experiment<'c> {
    experiment: &'c ExperimentConfig,
    bandit: &'c BanditConfig,
    agents: &'c [AgentConfig],
    evaluator: Evaluator,
}

impl<'c> Experiment<'c> {
    pub fn new(config: &'c AppConfig) -> Self {
        Self {
            experiment: &config.experiment,
            bandit: &config.bandit,
            agents: &config.agents,
            evaluator: Evaluator::new(config.experiment.log_every),
        }
    }

    pub fn run(&self) -> ComparisonReport {
        let mut runs = Vec::new();

        for seed in 0..self.experiment.num_seeds {
            info!(seed, "Running experiments");

            for agent in self.agents {
                match self.run_agent(agent, seed) {
                    Ok(report) => {
                        info!(
                            run_id = %report.run_id,
                            agent = %report.agent_name,
                            seed,
                            final_regret = report.final_regret,
                            avg_regret = report.avg_regret,
                            execution_time_secs = report.execution_time_secs,
                            "Run completed"
                        );
                        runs.push(report);
                    }
                    Err(err) => warn!(agent = %agent.name, seed, error = %err, "Run failed"),
                }
            }
        }

        let summaries = summarize(self.agents, &runs);
        let best_agent = summaries
            .iter()
            .fold(None, |best: Option<&AgentSummary>, summary| match best {
                Some(best) if best.avg_regret.mean <= summary.avg_regret.mean => Some(best),
                _ => Some(summary),
            })
            .map(|summary| summary.agent_name.clone());

        if let Some(best_agent) = &best_agent {
            info!(best_agent = %best_agent, "Comparison completed");
        }

        ComparisonReport {
            runs,
            summaries,
            best_agent,
        }
    }

    pub fn run_agent(&self, config: &AgentConfig, seed: u64) -> Result<RunReport, BanditError> {
        let (bandit_seed, agent_seed) = derive_seeds(seed);
        let generator: &dyn ArmGenerator = self.bandit.arms.as_ref();
        let bandit = Bandit::new(self.bandit.n_arms, generator, Some(bandit_seed))?;
        let mut agent = config.policy.build(&bandit, Some(agent_seed))?;

        let start = Instant::now();
        let summary = self
            .evaluator
            .evaluate(agent.as_mut(), self.experiment.num_rounds)?;
        let execution_time_secs = start.elapsed().as_secs_f64();

        let include_series = self.experiment.include_series;
        Ok(RunReport {
            run_id: Uuid::new_v4(),
            agent_name: config.name.clone(),
            agent_type: config.policy.clone(),
            seed,
            bandit_seed: bandit.seed(),
            bandit_best_arm: bandit.best_arm(),
            bandit_best_arm_mean: bandit.best_arm_mean(),
            bandit_arm_means: bandit.arm_means(),
            final_regret: summary.final_regret,
            final_reward: summary.final_reward,
            avg_regret: summary.average_regret(),
            avg_reward: summary.average_reward(),
            execution_time_secs,
            stats: agent.stats(),
            cumulative_regret: include_series.then_some(summary.cumulative_regret),
            cumulative_reward: include_series.then_some(summary.cumulative_reward),
        })
    }
}

fn summarize(agents: &[AgentConfig], runs: &[RunReport]) -> Vec<AgentSummary> {
    let mut names: Vec<&str> = Vec::new();
    for agent in agents {
        if !names.contains(&agent.name.as_str()) {
            names.push(&agent.name);
        }
    }

    names
        .into_iter()
        .filter_map(|name| {
            let runs: Vec<&RunReport> = runs.iter().filter(|run| run.agent_name == name).collect();
            let sample = |f: fn(&RunReport) -> f64| {
                MeanStd::from_sample(&runs.iter().map(|run| f(run)).collect::<Vec<_>>())
            };

            Some(AgentSummary {
                agent_name: name.to_string(),
                runs: runs.len(),
                avg_regret: sample(|run| run.avg_regret)?,
                avg_reward: sample(|run| run.avg_reward)?,
                execution_time_secs: sample(|run| run.execution_time_secs)?,
            })
        })
        .collect()
}
