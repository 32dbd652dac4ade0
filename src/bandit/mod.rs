pub mod arm;
mod environment;
pub mod generator;

pub use arm::{Arm, GaussianArm};
pub use environment::Bandit;
pub use generator::{ArmGenerator, FixedArms, GaussianArms};
