use serde::{Deserialize, Serialize};

/// Snapshot produced once by a mission when its simulation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub description: String,
    pub initial_progress: f64,
}

impl SimulationState {
    /// A state at the very beginning of a simulation.
    pub fn starting(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            initial_progress: 0.0,
        }
    }
}

/// Configuration captured for one deployed activity.
///
/// Created on deployment and never mutated afterwards; a redeploy of the same
/// activity replaces it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// Tag of the mission variant, e.g. `"ClassificationMission"`.
    pub mission_type: String,
    pub initial_state: SimulationState,
}

impl ActivityConfig {
    pub fn new(mission_type: impl Into<String>, initial_state: SimulationState) -> Self {
        Self {
            mission_type: mission_type.into(),
            initial_state,
        }
    }
}
