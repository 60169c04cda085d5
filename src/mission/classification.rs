use super::{constraints, integer_param, string_list_param, string_param, Mission, MissionKind};
use crate::model::SimulationState;
use serde_json::Value;

pub const DEFAULT_CLASSIFICATION_ROBOT: &str = "6-axis manipulator arm";
pub const DEFAULT_TARGET_OBJECTS: u64 = 8;

/// Sort a number of objects according to an ordered list of criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationMission {
    pub robot_type: String,
    pub target_object_count: u64,
    pub sorting_criteria: Vec<String>,
}

impl Default for ClassificationMission {
    fn default() -> Self {
        Self {
            robot_type: DEFAULT_CLASSIFICATION_ROBOT.to_string(),
            target_object_count: DEFAULT_TARGET_OBJECTS,
            sorting_criteria: default_criteria(),
        }
    }
}

fn default_criteria() -> Vec<String> {
    vec!["color".to_string(), "size".to_string()]
}

impl Mission for ClassificationMission {
    fn kind(&self) -> MissionKind {
        MissionKind::Classification
    }

    fn load_parameters(&mut self, config: &Value) {
        let mission = constraints(config);
        self.robot_type = string_param(Some(config), "robot_type")
            .unwrap_or_else(|| DEFAULT_CLASSIFICATION_ROBOT.to_string());
        self.target_object_count =
            integer_param(mission, "target_objects").unwrap_or(DEFAULT_TARGET_OBJECTS);
        self.sorting_criteria =
            string_list_param(mission, "sorting_criteria").unwrap_or_else(default_criteria);
    }

    fn start_simulation(&self) -> SimulationState {
        SimulationState::starting(format!(
            "Classification mission for {} objects by criteria [{}]",
            self.target_object_count,
            self.sorting_criteria.join(", ")
        ))
    }
}
