//! Requests understood by the registry actor.
//!
//! Only [`RegistryAction::Register`] mutates state, and it writes both mappings in one
//! message, so no reader can see a config without its analytics.

use crate::model::{ActivityConfig, AnalyticsRecord};

/// Operations on the [`ActivityRegistry`](super::ActivityRegistry).
#[derive(Debug, Clone)]
pub enum RegistryAction {
    /// Upsert config and reseed analytics for an activity.
    Register {
        activity_id: String,
        config: ActivityConfig,
        base_url: String,
    },
    /// Read the config of an activity.
    GetConfig(String),
    /// Read the analytics of an activity (default record when unknown).
    GetAnalytics(String),
}

/// Results from RegistryActions - variants match 1:1 with RegistryAction
#[derive(Debug, Clone)]
pub enum RegistryActionResult {
    Register,
    GetConfig(Option<ActivityConfig>),
    GetAnalytics(Vec<AnalyticsRecord>),
}
