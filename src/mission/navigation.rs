use super::{constraints, integer_param, string_param, Mission, MissionKind};
use crate::model::SimulationState;
use serde_json::Value;

pub const DEFAULT_NAVIGATION_ROBOT: &str = "mobile platform";
pub const DEFAULT_MAX_EXECUTION_SECS: u64 = 150;

/// Drive a mobile robot to its goal within a time limit.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationMission {
    pub robot_type: String,
    pub max_execution_time_seconds: u64,
}

impl Default for NavigationMission {
    fn default() -> Self {
        Self {
            robot_type: DEFAULT_NAVIGATION_ROBOT.to_string(),
            max_execution_time_seconds: DEFAULT_MAX_EXECUTION_SECS,
        }
    }
}

impl Mission for NavigationMission {
    fn kind(&self) -> MissionKind {
        MissionKind::Navigation
    }

    fn load_parameters(&mut self, config: &Value) {
        let mission = constraints(config);
        self.robot_type = string_param(Some(config), "robot_type")
            .unwrap_or_else(|| DEFAULT_NAVIGATION_ROBOT.to_string());
        self.max_execution_time_seconds =
            integer_param(mission, "max_execution_time_s").unwrap_or(DEFAULT_MAX_EXECUTION_SECS);
    }

    fn start_simulation(&self) -> SimulationState {
        SimulationState::starting(format!(
            "Navigation mission with a maximum time of {} seconds",
            self.max_execution_time_seconds
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_describe_150_seconds() {
        let mut mission = NavigationMission::default();
        mission.load_parameters(&json!({}));
        let state = mission.start_simulation();
        assert_eq!(mission.robot_type, "mobile platform");
        assert_eq!(state.description, "Navigation mission with a maximum time of 150 seconds");
        assert_eq!(state.initial_progress, 0.0);
    }

    #[test]
    fn time_limit_comes_from_constraints() {
        let mut mission = NavigationMission::default();
        mission.load_parameters(&json!({"mission_constraints": {"max_execution_time_s": 90}}));
        assert_eq!(mission.max_execution_time_seconds, 90);
        assert!(mission.start_simulation().description.contains("90 seconds"));
    }
}
