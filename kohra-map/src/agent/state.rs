//! Agent state machine states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission state of an [`OnlineAgent`](super::OnlineAgent)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// Goal not yet reachable in the known map; heading for a frontier
    Exploring,

    /// Following a known path to the goal
    PathFollowing,

    /// Standing on the goal
    Done,

    /// No goal path and no reachable frontier, or step budget spent
    Stuck,
}

impl AgentState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentState::Done | AgentState::Stuck)
    }

    /// Is the agent still moving?
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AgentState::Exploring => "Exploring",
            AgentState::PathFollowing => "PathFollowing",
            AgentState::Done => "Done",
            AgentState::Stuck => "Stuck",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
