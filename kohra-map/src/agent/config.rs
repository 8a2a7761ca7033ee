//! Agent configuration.

use serde::{Deserialize, Serialize};

use crate::search::Algorithm;

/// Online agent configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Search algorithm used for every plan
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Reveal the map progressively (false = full-map mode)
    #[serde(default = "default_fog")]
    pub fog: bool,

    /// Step budget for [`OnlineAgent::run_configured`](super::OnlineAgent::run_configured)
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_fog() -> bool {
    true
}

fn default_max_steps() -> usize {
    10_000
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            fog: default_fog(),
            max_steps: default_max_steps(),
        }
    }
}

impl AgentConfig {
    /// Default config with the given algorithm
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Set fog mode
    pub fn fog(mut self, fog: bool) -> Self {
        self.fog = fog;
        self
    }

    /// Set the step budget
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}
