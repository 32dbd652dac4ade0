use crate::errors::BanditError;

use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};
use std::fmt::Debug;

/// A single reward source. Its true mean never changes once the arm exists.
pub trait Arm: Debug + Send {
    fn mean(&self) -> f64;
    fn pull(&self, rng: &mut SmallRng) -> f64;
}

#[derive(Debug, Clone)]
pub struct GaussianArm {
    mean: f64,
    distribution: Normal<f64>,
}

impl GaussianArm {
    /// A zero `std` is accepted and yields an arm whose pulls always equal its mean.
    pub fn new(mean: f64, std: f64) -> Result<Self, BanditError> {
        if !mean.is_finite() {
            return Err(BanditError::invalid("mean", mean, "must be finite"));
        }
        if !(std.is_finite() && std >= 0.0) {
            return Err(BanditError::invalid("std", std, "must be finite and >= 0"));
        }
        let distribution = Normal::new(mean, std)
            .map_err(|_| BanditError::invalid("std", std, "must be finite and >= 0"))?;

        Ok(Self { mean, distribution })
    }
}

impl Arm for GaussianArm {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn pull(&self, rng: &mut SmallRng) -> f64 {
        self.distribution.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SEED: u64 = 1234;

    #[test]
    fn rejects_negative_std() {
        assert!(matches!(
            GaussianArm::new(0.0, -1.0),
            Err(BanditError::InvalidParameter { name: "std", .. })
        ));
        assert!(GaussianArm::new(0.0, f64::NAN).is_err());
        assert!(GaussianArm::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn zero_std_is_deterministic() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let arm = GaussianArm::new(5.0, 0.0).unwrap();

        assert!((0..10).all(|_| arm.pull(&mut rng) == 5.0));
        assert_eq!(arm.mean(), 5.0);
    }

    #[test]
    fn samples_around_mean() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let arm = GaussianArm::new(2.0, 1.0).unwrap();

        let n = 20_000;
        let empirical = (0..n).map(|_| arm.pull(&mut rng)).sum::<f64>() / n as f64;
        assert!((empirical - 2.0).abs() < 0.05);
    }
}
