use super::agent::{Agent, AgentStats, PlayResult};
use super::estimates::{argmax, check_open_unit, check_probability, exponential_smoothing};

use crate::bandit::Bandit;
use crate::errors::BanditError;
use crate::rng::MaybeSeededRng;

use rand::Rng;

pub const DEFAULT_ALPHA: f64 = 0.1;

/// Explores uniformly with probability `eps`, otherwise exploits the best
/// estimate. Estimates are exponentially smoothed with step size `alpha`.
#[derive(Debug)]
pub struct EpsilonGreedy<'a> {
    bandit: &'a Bandit,
    eps: f64,
    alpha: f64,
    pulls: Vec<u64>,
    values: Vec<f64>,
    step: u64,
    rng: MaybeSeededRng,
}

impl<'a> EpsilonGreedy<'a> {
    pub fn new(
        bandit: &'a Bandit,
        eps: f64,
        alpha: f64,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        let eps = check_probability("eps", eps)?;
        let alpha = check_open_unit("alpha", alpha)?;
        let n_arms = bandit.n_arms();

        Ok(Self {
            bandit,
            eps,
            alpha,
            pulls: vec![0; n_arms],
            values: vec![0.0; n_arms],
            step: 0,
            rng: MaybeSeededRng::new(seed),
        })
    }

    fn select_arm(&mut self) -> usize {
        let rng = self.rng.get_rng();
        if rng.random::<f64>() < self.eps {
            rng.random_range(0..self.values.len())
        } else {
            argmax(&self.values).unwrap_or_default()
        }
    }
}

impl Agent for EpsilonGreedy<'_> {
    fn name(&self) -> &'static str {
        "EpsilonGreedy"
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
        self.values[selected_arm] =
            exponential_smoothing(self.values[selected_arm], reward, self.alpha);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandit::FixedArms;

    const SEED: u64 = 1234;

    fn fixed_bandit(means: Vec<f64>) -> Bandit {
        let n_arms = means.len();
        Bandit::new(n_arms, &FixedArms::new(means, 0.0), Some(SEED)).unwrap()
    }

    #[test]
    fn rejects_invalid_params() {
        let bandit = fixed_bandit(vec![0.0, 1.0]);

        assert!(EpsilonGreedy::new(&bandit, -0.1, DEFAULT_ALPHA, Some(SEED)).is_err());
        assert!(EpsilonGreedy::new(&bandit, 1.1, DEFAULT_ALPHA, Some(SEED)).is_err());
        assert!(EpsilonGreedy::new(&bandit, 0.1, 0.0, Some(SEED)).is_err());
        assert!(EpsilonGreedy::new(&bandit, 0.1, 1.0, Some(SEED)).is_err());
        assert!(EpsilonGreedy::new(&bandit, 0.0, 0.5, Some(SEED)).is_ok());
        assert!(EpsilonGreedy::new(&bandit, 1.0, 0.5, Some(SEED)).is_ok());
    }

    #[test]
    fn update_smooths() {
        let bandit = fixed_bandit(vec![1.0]);
        let mut agent = EpsilonGreedy::new(&bandit, 0.0, 0.5, Some(SEED)).unwrap();

        agent.play().unwrap();
        assert_eq!(agent.values[0], 0.5);
        agent.play().unwrap();
        assert_eq!(agent.values[0], 0.75);
        assert_eq!(agent.pulls[0], 2);
        assert_eq!(agent.step(), 2);
    }

    #[test]
    fn greedy_picks_argmax() {
        let bandit = fixed_bandit(vec![1.0, -1.0, 2.0, 0.5]);
        let mut agent = EpsilonGreedy::new(&bandit, 0.0, DEFAULT_ALPHA, Some(SEED)).unwrap();

        for _ in 0..50 {
            let expected = argmax(&agent.values).unwrap();
            let result = agent.play().unwrap();
            assert_eq!(result.selected_arm, expected);
        }
    }

    #[test]
    fn greedy_ties_pick_lowest_index() {
        // every arm pays 0, so the estimates stay tied at 0
        let bandit = fixed_bandit(vec![0.0, 0.0, 0.0]);
        let mut agent = EpsilonGreedy::new(&bandit, 0.0, DEFAULT_ALPHA, Some(SEED)).unwrap();

        assert!((0..20).all(|_| agent.play().unwrap().selected_arm == 0));
    }

    #[test]
    fn full_exploration_visits_all_arms() {
        let bandit = fixed_bandit(vec![0.0, 1.0, 2.0, 3.0]);
        let mut agent = EpsilonGreedy::new(&bandit, 1.0, DEFAULT_ALPHA, Some(SEED)).unwrap();

        for _ in 0..400 {
            agent.play().unwrap();
        }
        assert!(agent.stats().arms.iter().all(|arm| arm.pulls > 0));
        assert_eq!(agent.stats().step, 400);
    }

    #[test]
    fn learns_best_arm() {
        let bandit = Bandit::new(
            4,
            &FixedArms::new(vec![0.0, 1.0, 3.0, 2.0], 0.5),
            Some(SEED),
        )
        .unwrap();
        let mut agent = EpsilonGreedy::new(&bandit, 0.1, DEFAULT_ALPHA, Some(SEED)).unwrap();

        for _ in 0..5000 {
            agent.play().unwrap();
        }
        assert_eq!(argmax(&agent.values), Some(2));
        assert!(agent.pulls[2] > 2500);
    }
}
