mod agent;
pub mod epsilon_greedy;
pub mod estimates;
pub mod explore_then_commit;
pub mod ucb;

pub use agent::{Agent, AgentStats, ArmStats, PlayResult};
pub use epsilon_greedy::EpsilonGreedy;
pub use explore_then_commit::ExploreThenCommit;
pub use ucb::Ucb;

use crate::bandit::Bandit;
use crate::errors::BanditError;

use serde::{Deserialize, Serialize};

fn default_alpha() -> f64 {
    epsilon_greedy::DEFAULT_ALPHA
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AgentType {
    EpsilonGreedy {
        eps: f64,
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    ExploreThenCommit {
        num_trials: u64,
    },
    Ucb {
        delta: f64,
        c: f64,
        #[serde(default)]
        eps: f64,
    },
}

impl AgentType {
    pub fn build<'a>(
        &self,
        bandit: &'a Bandit,
        seed: Option<u64>,
    ) -> Result<Box<dyn Agent + 'a>, BanditError> {
        let agent: Box<dyn Agent + 'a> = match *self {
            AgentType::EpsilonGreedy { eps, alpha } => {
                Box::new(EpsilonGreedy::new(bandit, eps, alpha, seed)?)
            }
            AgentType::ExploreThenCommit { num_trials } => {
                Box::new(ExploreThenCommit::new(bandit, num_trials)?)
            }
            AgentType::Ucb { delta, c, eps } => Box::new(Ucb::new(bandit, delta, c, eps, seed)?),
        };

        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn deserialize_defaults() {
        let agent: AgentType =
            serde_json::from_str(r#"{"type": "Ucb", "delta": 0.1, "c": 2}"#).unwrap();
        assert_eq!(
            agent,
            AgentType::Ucb {
                delta: 0.1,
                c: 2.0,
                eps: 0.0
            }
        );

        let agent: AgentType =
            serde_json::from_str(r#"{"type": "EpsilonGreedy", "eps": 0.1}"#).unwrap();
        assert_eq!(
            agent,
            AgentType::EpsilonGreedy {
                eps: 0.1,
                alpha: 0.1
            }
        );
    }

    #[test]
    fn build() {
        let bandit = Bandit::gaussian(4, 0.0, 0.1, 1.0, Some(SEED)).unwrap();

        let agent = AgentType::ExploreThenCommit { num_trials: 10 }
            .build(&bandit, Some(SEED))
            .unwrap();
        assert_eq!(agent.name(), "ExploreThenCommit");
        assert_eq!(agent.bandit().n_arms(), 4);
    }

    #[test]
    fn negative_eps_rejected_everywhere() {
        let bandit = Bandit::gaussian(4, 0.0, 0.1, 1.0, Some(SEED)).unwrap();

        let agents = [
            AgentType::EpsilonGreedy {
                eps: -0.1,
                alpha: 0.1,
            },
            AgentType::Ucb {
                delta: 0.1,
                c: 2.0,
                eps: -0.1,
            },
        ];
        for agent in agents {
            assert!(matches!(
                agent.build(&bandit, Some(SEED)),
                Err(BanditError::InvalidParameter { name: "eps", .. })
            ));
        }
    }

    #[test]
    fn degenerate_delta_rejected() {
        let bandit = Bandit::gaussian(4, 0.0, 0.1, 1.0, Some(SEED)).unwrap();

        for delta in [0.0, 1.0] {
            assert!(matches!(
                AgentType::Ucb {
                    delta,
                    c: 2.0,
                    eps: 0.0
                }
                .build(&bandit, Some(SEED)),
                Err(BanditError::InvalidParameter { name: "delta", .. })
            ));
        }
    }
}
