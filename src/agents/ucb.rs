use super::agent::{Agent, AgentStats, PlayResult};
use super::estimates::{
    argmax, check_open_unit, check_positive, check_probability, confidence_radius,
    incremental_mean,
};

use crate::bandit::Bandit;
use crate::errors::BanditError;
use crate::rng::MaybeSeededRng;

use rand::Rng;

/// Upper confidence bound agent.
///
/// Every arm starts with an infinite bound so it gets pulled once before any
/// finite bound competes. After each pull the arm's bound is recomputed as
/// `value + c * sqrt(2 ln(1/delta) / pulls)`. With probability `eps` a uniformly
/// random arm is played instead.
#[derive(Debug)]
pub struct Ucb<'a> {
    bandit: &'a Bandit,
    delta: f64,
    c: f64,
    eps: f64,
    pulls: Vec<u64>,
    values: Vec<f64>,
    bounds: Vec<f64>,
    step: u64,
    rng: MaybeSeededRng,
}

impl<'a> Ucb<'a> {
    pub fn new(
        bandit: &'a Bandit,
        delta: f64,
        c: f64,
        eps: f64,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        let eps = check_probability("eps", eps)?;
        let delta = check_open_unit("delta", delta)?;
        let c = check_positive("c", c)?;
        let n_arms = bandit.n_arms();

        Ok(Self {
            bandit,
            delta,
            c,
            eps,
            pulls: vec![0; n_arms],
            values: vec![0.0; n_arms],
            bounds: vec![f64::INFINITY; n_arms],
            step: 0,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    fn select_arm(&mut self) -> usize {
        let rng = self.rng.get_rng();
        if rng.random::<f64>() < self.eps {
            rng.random_range(0..self.bounds.len())
        } else {
            argmax(&self.bounds).unwrap_or_default()
        }
    }
}

impl Agent for Ucb<'_> {
    fn name(&self) -> &'static str {
        "Ucb"
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
        let pulls = self.pulls[selected_arm];
        self.values[selected_arm] = incremental_mean(self.values[selected_arm], reward, pulls);
        self.bounds[selected_arm] =
            self.values[selected_arm] + confidence_radius(self.c, self.delta, pulls);
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
