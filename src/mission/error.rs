//! Error types for mission resolution.

use thiserror::Error;

/// Errors raised while resolving a mission.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MissionError {
    /// The activity identifier matched no known mission naming token.
    #[error("No mission recognized for activity_id: {0}")]
    UnrecognizedActivityKind(String),
}
