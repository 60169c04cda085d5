//! Identifier-based mission selection.
//!
//! The platform does not tell us which template an activity uses, so the variant is
//! inferred from the identifier itself: `CLASS` anywhere in the id selects a
//! classification mission, otherwise `NAV` selects navigation. The match is
//! case-sensitive and `CLASS` wins when both tokens appear.

use super::{ClassificationMission, Mission, MissionError, NavigationMission};
use tracing::debug;

const CLASSIFICATION_TOKEN: &str = "CLASS";
const NAVIGATION_TOKEN: &str = "NAV";

/// Builds fresh mission instances from activity identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionFactory;

impl MissionFactory {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `activity_id` to a default-initialized mission.
    ///
    /// # Errors
    /// [`MissionError::UnrecognizedActivityKind`] when neither token is present.
    pub fn create_mission(&self, activity_id: &str) -> Result<Box<dyn Mission>, MissionError> {
        let mission: Box<dyn Mission> = if activity_id.contains(CLASSIFICATION_TOKEN) {
            Box::new(ClassificationMission::default())
        } else if activity_id.contains(NAVIGATION_TOKEN) {
            Box::new(NavigationMission::default())
        } else {
            return Err(MissionError::UnrecognizedActivityKind(activity_id.to_string()));
        };
        debug!(activity_id, kind = %mission.kind(), "Mission resolved");
        Ok(mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::MissionKind;

    fn kind_of(id: &str) -> Result<MissionKind, MissionError> {
        MissionFactory::new().create_mission(id).map(|m| m.kind())
    }

    #[test]
    fn class_token_selects_classification() {
        assert_eq!(kind_of("CLASS101"), Ok(MissionKind::Classification));
        assert_eq!(kind_of("intro-CLASS"), Ok(MissionKind::Classification));
    }

    #[test]
    fn nav_token_selects_navigation() {
        assert_eq!(kind_of("NAV7"), Ok(MissionKind::Navigation));
        assert_eq!(kind_of("maze_NAV_2"), Ok(MissionKind::Navigation));
    }

    #[test]
    fn class_wins_over_nav() {
        assert_eq!(kind_of("NAV-CLASS"), Ok(MissionKind::Classification));
        assert_eq!(kind_of("CLASSNAV"), Ok(MissionKind::Classification));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            kind_of("class101"),
            Err(MissionError::UnrecognizedActivityKind("class101".to_string()))
        );
        assert!(kind_of("nav").is_err());
    }

    #[test]
    fn arbitrary_strings_do_not_panic() {
        for id in ["", " ", "UNKNOWN99", "ñ€🚀", "CLAS", "NA V"] {
            assert!(kind_of(id).is_err(), "{id:?} should not resolve");
        }
    }
}
