use super::arm::Arm;
use super::generator::{ArmGenerator, GaussianArms};

use crate::errors::BanditError;
use crate::rng::MaybeSeededRng;

use std::cell::RefCell;
use tracing::debug;

/// The environment agents interact with.
///
/// Arms are generated once at construction and never change afterwards, so
/// `best_arm` and `best_arm_mean` are computed once and frozen. They are oracle
/// knowledge for regret computation and must not be consulted by agents.
#[derive(Debug)]
pub struct Bandit {
    arms: Vec<Box<dyn Arm>>,
    best_arm: usize,
    best_arm_mean: f64,
    rng: RefCell<MaybeSeededRng>,
}

impl Bandit {
    pub fn new(
        n_arms: usize,
        generator: &dyn ArmGenerator,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        if n_arms == 0 {
            return Err(BanditError::invalid(
                "n_arms",
                0.0,
                "a bandit needs at least one arm",
            ));
        }

        if generator.n_arms().is_some_and(|expected| expected != n_arms) {
            return Err(BanditError::invalid(
                "n_arms",
                n_arms as f64,
                "does not match the number of arms the generator describes",
            ));
        }

        let mut rng = MaybeSeededRng::new(seed);
        let arms = (0..n_arms)
            .map(|arm_id| generator.generate_arm(arm_id, rng.get_rng()))
            .collect::<Result<Vec<_>, _>>()?;

        // strict comparison keeps the first occurrence on ties
        let (best_arm, best_arm_mean) = arms.iter().map(|arm| arm.mean()).enumerate().fold(
            (0, f64::NEG_INFINITY),
            |(best_arm, best_mean), (arm_id, mean)| {
                if mean > best_mean {
                    (arm_id, mean)
                } else {
                    (best_arm, best_mean)
                }
            },
        );

        debug!(
            n_arms,
            best_arm,
            best_arm_mean,
            arm_means = ?arms.iter().map(|arm| arm.mean()).collect::<Vec<_>>(),
            "Generated bandit"
        );

        Ok(Self {
            arms,
            best_arm,
            best_arm_mean,
            rng: RefCell::new(rng),
        })
    }

    pub fn gaussian(
        n_arms: usize,
        mean: f64,
        arms_std: f64,
        std: f64,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        Self::new(n_arms, &GaussianArms::new(mean, arms_std, std), seed)
    }

    pub fn n_arms(&self) -> usize {
        self.arms.len()
    }

    pub fn arms(&self) -> &[Box<dyn Arm>] {
        &self.arms
    }

    pub fn arm_means(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.mean()).collect()
    }

    pub fn best_arm(&self) -> usize {
        self.best_arm
    }

    pub fn best_arm_mean(&self) -> f64 {
        self.best_arm_mean
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng.borrow().seed()
    }

    /// Gap between the best arm's mean and `arm_id`'s mean. Never negative.
    pub fn regret(&self, arm_id: usize) -> Result<f64, BanditError> {
        Ok(self.best_arm_mean - self.arm(arm_id)?.mean())
    }

    pub fn pull(&self, arm_id: usize) -> Result<f64, BanditError> {
        let arm = self.arm(arm_id)?;
        Ok(arm.pull(self.rng.borrow_mut().get_rng()))
    }

    fn arm(&self, arm_id: usize) -> Result<&dyn Arm, BanditError> {
        self.arms
            .get(arm_id)
            .map(|arm| arm.as_ref())
            .ok_or(BanditError::ArmOutOfRange {
                arm_id,
                n_arms: self.arms.len(),
            })
    }
}
