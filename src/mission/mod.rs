//! # Missions
//!
//! A mission is the robotic-activity template behind a deployed activity. Every
//! variant implements the [`Mission`] trait; the [`MissionFactory`] picks the variant
//! from the activity identifier.
//!
//! ## Structure
//!
//! - [`classification`] - sort a set of objects by criteria
//! - [`navigation`] - reach a goal within a time limit
//! - [`factory`] - identifier-based variant selection
//! - [`error`] - [`MissionError`]
//!
//! ## Parameters
//!
//! `load_parameters` takes an arbitrary JSON object. `robot_type` sits at the top
//! level, variant-specific keys under `mission_constraints`:
//!
//! ```json
//! {
//!   "robot_type": "6-axis manipulator arm",
//!   "mission_constraints": { "target_objects": 8, "sorting_criteria": ["color", "size"] }
//! }
//! ```
//!
//! Missing keys, or keys holding the wrong JSON type, fall back to defaults.

pub mod classification;
pub mod error;
pub mod factory;
pub mod navigation;

pub use classification::ClassificationMission;
pub use error::*;
pub use factory::MissionFactory;
pub use navigation::NavigationMission;

use crate::model::SimulationState;
use serde_json::Value;
use std::fmt;

/// Tag naming a mission variant, stored in the activity config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionKind {
    Classification,
    Navigation,
}

impl MissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionKind::Classification => "ClassificationMission",
            MissionKind::Navigation => "NavigationMission",
        }
    }
}

impl fmt::Display for MissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability set shared by all mission variants.
pub trait Mission: Send + fmt::Debug {
    /// Variant tag.
    fn kind(&self) -> MissionKind;

    /// Populate attributes from `config`. Never fails; absent values use defaults.
    fn load_parameters(&mut self, config: &Value);

    /// Describe the configured mission. Progress always starts at `0.0`.
    fn start_simulation(&self) -> SimulationState;
}

/// The `mission_constraints` object, if present.
pub(crate) fn constraints(config: &Value) -> Option<&Value> {
    config.get("mission_constraints").filter(|v| v.is_object())
}

pub(crate) fn string_param(config: Option<&Value>, key: &str) -> Option<String> {
    config?.get(key)?.as_str().map(str::to_string)
}

pub(crate) fn integer_param(config: Option<&Value>, key: &str) -> Option<u64> {
    config?.get(key)?.as_u64()
}

pub(crate) fn string_list_param(config: Option<&Value>, key: &str) -> Option<Vec<String>> {
    let items = config?.get(key)?.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
