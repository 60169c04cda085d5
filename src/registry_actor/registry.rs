//! The two per-activity mappings.

use crate::model::{ActivityConfig, AnalyticsRecord, SimulationState};
use std::collections::HashMap;

/// In-memory store of activity configs and analytics, keyed by activity identifier.
///
/// Plain data with no locking; exclusive access is provided by the actor that owns it.
/// Every write is an unconditional upsert (last write wins, no merge).
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    configs: HashMap<String, ActivityConfig>,
    analytics: HashMap<String, Vec<AnalyticsRecord>>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_config(
        &mut self,
        activity_id: &str,
        mission_type: impl Into<String>,
        initial_state: SimulationState,
    ) {
        self.configs.insert(
            activity_id.to_string(),
            ActivityConfig::new(mission_type, initial_state),
        );
    }

    pub fn get_config(&self, activity_id: &str) -> Option<&ActivityConfig> {
        self.configs.get(activity_id)
    }

    /// Replace the analytics of `activity_id` with the single placeholder-student record.
    pub fn seed_analytics(&mut self, activity_id: &str, base_url: &str) {
        self.analytics.insert(
            activity_id.to_string(),
            vec![AnalyticsRecord::seeded(activity_id, base_url)],
        );
    }

    /// Stored records, or one default record for an unknown activity. Never empty.
    pub fn get_analytics(&self, activity_id: &str) -> Vec<AnalyticsRecord> {
        match self.analytics.get(activity_id) {
            Some(records) => records.clone(),
            None => vec![AnalyticsRecord::unknown_activity()],
        }
    }

    /// Store `config` and seed analytics for `activity_id` in one step.
    pub fn register(&mut self, activity_id: &str, config: ActivityConfig, base_url: &str) {
        self.put_config(activity_id, config.mission_type, config.initial_state);
        self.seed_analytics(activity_id, base_url);
    }

    pub fn config_count(&self) -> usize {
        self.configs.len()
    }

    pub fn analytics_count(&self) -> usize {
        self.analytics.len()
    }
}
