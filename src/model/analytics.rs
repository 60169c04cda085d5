//! Analytics records in the shape the deploying platform expects.
//!
//! A record carries one student's measurements for one activity. The field names and
//! their order are fixed; only values change.

use serde::{Deserialize, Serialize};

/// Placeholder student seeded on every deployment.
pub const PLACEHOLDER_STUDENT_ID: &str = "1001";

pub const ACCESSED_FIELD: &str = "Accessed activity";
pub const SUBMISSIONS_FIELD: &str = "Code submissions";
pub const PROGRESS_FIELD: &str = "Activity progress (%)";
pub const PROFILE_FIELD: &str = "Student activity profile";

/// Value type tags as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "text/plain")]
    Text,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "URL")]
    Url,
}

/// A single measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// `{name, type, value}` entry of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub value: FieldValue,
}

impl AnalyticsField {
    fn new(name: &str, kind: FieldType, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value,
        }
    }
}

/// `{name, type}` entry used by schema listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: &str, kind: FieldType) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Measurements for one student in one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    #[serde(rename = "inveniraStdID")]
    pub student_id: String,
    #[serde(rename = "quantAnalytics")]
    pub quantitative: Vec<AnalyticsField>,
    #[serde(rename = "qualAnalytics")]
    pub qualitative: Vec<AnalyticsField>,
}

impl AnalyticsRecord {
    fn with_values(accessed: bool, submissions: i64, progress: f64, profile_url: String) -> Self {
        Self {
            student_id: PLACEHOLDER_STUDENT_ID.to_string(),
            quantitative: vec![
                AnalyticsField::new(ACCESSED_FIELD, FieldType::Boolean, FieldValue::Boolean(accessed)),
                AnalyticsField::new(SUBMISSIONS_FIELD, FieldType::Integer, FieldValue::Integer(submissions)),
                AnalyticsField::new(PROGRESS_FIELD, FieldType::Float, FieldValue::Float(progress)),
            ],
            qualitative: vec![AnalyticsField::new(
                PROFILE_FIELD,
                FieldType::Url,
                FieldValue::Text(profile_url),
            )],
        }
    }

    /// Record stored when an activity is deployed.
    ///
    /// The profile URL points back into this service under `base_url`.
    pub fn seeded(activity_id: &str, base_url: &str) -> Self {
        let profile_url = format!(
            "{}/qualitative_profile?activityID={}&studentID={}",
            base_url.trim_end_matches('/'),
            activity_id,
            PLACEHOLDER_STUDENT_ID
        );
        Self::with_values(true, 0, 0.0, profile_url)
    }

    /// Record synthesized for an activity that was never deployed.
    pub fn unknown_activity() -> Self {
        Self::with_values(false, 0, 0.0, String::new())
    }

    fn quantitative_value(&self, name: &str) -> Option<&FieldValue> {
        self.quantitative.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    pub fn accessed(&self) -> Option<bool> {
        match self.quantitative_value(ACCESSED_FIELD)? {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn submission_count(&self) -> Option<i64> {
        match self.quantitative_value(SUBMISSIONS_FIELD)? {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<f64> {
        match self.quantitative_value(PROGRESS_FIELD)? {
            FieldValue::Float(p) => Some(*p),
            FieldValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn profile_url(&self) -> Option<&str> {
        self.qualitative
            .iter()
            .find(|f| f.name == PROFILE_FIELD)
            .and_then(|f| match &f.value {
                FieldValue::Text(url) => Some(url.as_str()),
                _ => None,
            })
    }
}

/// Static description of the analytics a record carries, without values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSchema {
    #[serde(rename = "qualAnalytics")]
    pub qualitative: Vec<FieldDescriptor>,
    #[serde(rename = "quantAnalytics")]
    pub quantitative: Vec<FieldDescriptor>,
}

impl Default for AnalyticsSchema {
    fn default() -> Self {
        Self {
            qualitative: vec![FieldDescriptor::new(PROFILE_FIELD, FieldType::Url)],
            quantitative: vec![
                FieldDescriptor::new(ACCESSED_FIELD, FieldType::Boolean),
                FieldDescriptor::new(SUBMISSIONS_FIELD, FieldType::Integer),
                FieldDescriptor::new(PROGRESS_FIELD, FieldType::Float),
            ],
        }
    }
}

/// Parameters an instructor can set on the configuration form.
pub fn configurable_params() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("robot_type", FieldType::Text),
        FieldDescriptor::new("target_objects", FieldType::Integer),
        FieldDescriptor::new("sorting_criteria", FieldType::Text),
        FieldDescriptor::new("max_execution_time_s", FieldType::Integer),
        FieldDescriptor::new("programming_language", FieldType::Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seeded_record_matches_wire_shape() {
        let record = AnalyticsRecord::seeded("CLASS101", "http://localhost:5000/");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "inveniraStdID": "1001",
                "quantAnalytics": [
                    {"name": "Accessed activity", "type": "boolean", "value": true},
                    {"name": "Code submissions", "type": "integer", "value": 0},
                    {"name": "Activity progress (%)", "type": "float", "value": 0.0}
                ],
                "qualAnalytics": [
                    {
                        "name": "Student activity profile",
                        "type": "URL",
                        "value": "http://localhost:5000/qualitative_profile?activityID=CLASS101&studentID=1001"
                    }
                ]
            })
        );
    }

    #[test]
    fn unknown_activity_record_has_defaults() {
        let record = AnalyticsRecord::unknown_activity();
        assert_eq!(record.student_id, "1001");
        assert_eq!(record.accessed(), Some(false));
        assert_eq!(record.submission_count(), Some(0));
        assert_eq!(record.progress(), Some(0.0));
        assert_eq!(record.profile_url(), Some(""));
    }

    #[test]
    fn schema_lists_names_and_types_only() {
        let value = serde_json::to_value(AnalyticsSchema::default()).unwrap();
        assert_eq!(value["qualAnalytics"], json!([{"name": "Student activity profile", "type": "URL"}]));
        assert_eq!(value["quantAnalytics"].as_array().unwrap().len(), 3);
        assert!(value["quantAnalytics"][0].get("value").is_none());
    }

    #[test]
    fn configurable_params_use_platform_types() {
        let value = serde_json::to_value(configurable_params()).unwrap();
        assert_eq!(value[0], json!({"name": "robot_type", "type": "text/plain"}));
        assert_eq!(value[3], json!({"name": "max_execution_time_s", "type": "integer"}));
        assert_eq!(value.as_array().unwrap().len(), 5);
    }
}
