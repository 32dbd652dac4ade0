use super::arm::{Arm, GaussianArm};

use crate::errors::BanditError;

use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Produces the arms of a bandit. New reward families plug in by
/// implementing this trait, and are selected from config by their `type` tag.
#[typetag::serde(tag = "type")]
pub trait ArmGenerator: Debug + Send + Sync {
    fn generate_arm(
        &self,
        arm_id: usize,
        rng: &mut SmallRng,
    ) -> Result<Box<dyn Arm>, BanditError>;

    /// Number of arms this generator describes, when it fixes one.
    fn n_arms(&self) -> Option<usize> {
        None
    }
}

/// Arm means are drawn from Normal(mean, arms_std), rewards from Normal(arm mean, std).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianArms {
    pub mean: f64,
    pub arms_std: f64,
    pub std: f64,
}

impl GaussianArms {
    pub fn new(mean: f64, arms_std: f64, std: f64) -> Self {
        Self {
            mean,
            arms_std,
            std,
        }
    }
}

#[typetag::serde(name = "Gaussian")]
impl ArmGenerator for GaussianArms {
    fn generate_arm(&self, _: usize, rng: &mut SmallRng) -> Result<Box<dyn Arm>, BanditError> {
        if !self.mean.is_finite() {
            return Err(BanditError::invalid("mean", self.mean, "must be finite"));
        }
        if !(self.arms_std.is_finite() && self.arms_std >= 0.0) {
            return Err(BanditError::invalid(
                "arms_std",
                self.arms_std,
                "must be finite and >= 0",
            ));
        }
        let arm_mean = Normal::new(self.mean, self.arms_std)
            .map_err(|_| {
                BanditError::invalid("arms_std", self.arms_std, "must be finite and >= 0")
            })?
            .sample(rng);

        Ok(Box::new(GaussianArm::new(arm_mean, self.std)?))
    }
}

/// Arms with explicitly chosen means, one entry per arm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedArms {
    pub means: Vec<f64>,
    pub std: f64,
}

impl FixedArms {
    pub fn new(means: Vec<f64>, std: f64) -> Self {
        Self { means, std }
    }
}

#[typetag::serde(name = "Fixed")]
impl ArmGenerator for FixedArms {
    fn generate_arm(&self, arm_id: usize, _: &mut SmallRng) -> Result<Box<dyn Arm>, BanditError> {
        let mean = self.means.get(arm_id).copied().ok_or_else(|| {
            BanditError::invalid(
                "n_arms",
                (arm_id + 1) as f64,
                "exceeds the number of fixed means",
            )
        })?;

        Ok(Box::new(GaussianArm::new(mean, self.std)?))
    }

    fn n_arms(&self) -> Option<usize> {
        Some(self.means.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SEED: u64 = 1234;

    #[test]
    fn gaussian_arms_share_reward_noise() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let generator = GaussianArms::new(0.0, 0.1, 1.0);

        let means: Vec<f64> = (0..4)
            .map(|arm_id| generator.generate_arm(arm_id, &mut rng).unwrap().mean())
            .collect();
        assert!(means.iter().all(|mean| mean.abs() < 1.0));
        assert!(means.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn gaussian_arms_rejects_bad_params() {
        let mut rng = SmallRng::seed_from_u64(SEED);

        assert!(GaussianArms::new(0.0, -0.1, 1.0).generate_arm(0, &mut rng).is_err());
        assert!(GaussianArms::new(0.0, 0.1, -1.0).generate_arm(0, &mut rng).is_err());
    }

    #[test]
    fn fixed_arms() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let generator = FixedArms::new(vec![0.0, 5.0], 0.0);

        assert_eq!(generator.generate_arm(1, &mut rng).unwrap().mean(), 5.0);
        assert!(matches!(
            generator.generate_arm(2, &mut rng),
            Err(BanditError::InvalidParameter { name: "n_arms", .. })
        ));
        assert_eq!(generator.n_arms(), Some(2));
        assert_eq!(GaussianArms::new(0.0, 0.1, 1.0).n_arms(), None);
    }

    #[test]
    fn deserialize_by_tag() {
        let generator: Box<dyn ArmGenerator> =
            serde_json::from_str(r#"{"type": "Fixed", "means": [1.0, 2.0], "std": 0.0}"#)
                .unwrap();
        let mut rng = SmallRng::seed_from_u64(SEED);
        assert_eq!(generator.generate_arm(0, &mut rng).unwrap().mean(), 1.0);

        let generator: Box<dyn ArmGenerator> = serde_json::from_str(
            r#"{"type": "Gaussian", "mean": 0.0, "arms_std": 0.0, "std": 1.0}"#,
        )
        .unwrap();
        assert_eq!(generator.generate_arm(0, &mut rng).unwrap().mean(), 0.0);
    }
}
