pub mod agents;
pub mod bandit;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod experiment;
mod rng;

pub use agents::{Agent, AgentType, EpsilonGreedy, ExploreThenCommit, PlayResult, Ucb};
pub use bandit::{Arm, ArmGenerator, Bandit, FixedArms, GaussianArm, GaussianArms};
pub use errors::{BanditError, RunError};
pub use evaluator::{EvaluationSummary, Evaluator};
