//! Route handlers.

use super::error::ApiError;
use super::{config_page, AppState};
use crate::error::ProviderError;
use crate::model::{configurable_params, AnalyticsRecord, AnalyticsSchema, FieldDescriptor};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const SERVICE_NAME: &str = "FRS Activity Provider";
pub const SERVICE_VERSION: &str = "1.1";

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

const ACTIVITY_ID_KEY: &str = "activityID";

/// First `activityID` value of the query string; later repeats are ignored.
fn first_activity_id(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == ACTIVITY_ID_KEY)
        .map(|(_, value)| value.as_str())
}

/// `activityID` of an analytics request body.
///
/// Non-empty strings are taken as-is and other truthy scalars by their JSON text.
/// Null, `""`, `0` and `false` count as missing.
fn body_activity_id(body: &Value) -> Result<String, ProviderError> {
    let object = body.as_object().ok_or_else(|| {
        ProviderError::InvalidRequestBody("expected a JSON object".to_string())
    })?;
    match object.get(ACTIVITY_ID_KEY) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ProviderError::MissingActivityId),
        Some(Value::String(id)) if id.is_empty() => Err(ProviderError::MissingActivityId),
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ProviderError::MissingActivityId),
        Some(scalar @ (Value::Number(_) | Value::Bool(true))) => Ok(scalar.to_string()),
        Some(_) => Err(ProviderError::InvalidRequestBody(format!(
            "{ACTIVITY_ID_KEY} must be a scalar"
        ))),
    }
}

/// Base URL the platform used to reach us: `http://<Host>`, else the configured fallback.
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.config.public_url {
        return url.trim_end_matches('/').to_string();
    }
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(|host| format!("http://{host}"))
        .unwrap_or_else(|| state.config.fallback_base_url())
}

/// GET /
pub async fn root() -> &'static str {
    "WebService FRS: Online!"
}

/// GET /status
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// GET /config
pub async fn config_form() -> Html<String> {
    Html(config_page::render())
}

/// GET /json_params
pub async fn json_params() -> Json<Vec<FieldDescriptor>> {
    Json(configurable_params())
}

/// GET /analytics_list
pub async fn analytics_list() -> Json<AnalyticsSchema> {
    Json(AnalyticsSchema::default())
}

/// GET /deploy?activityID=X
///
/// A repeated `activityID` resolves to its first value.
pub async fn deploy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let base = base_url(&state, &headers);
    state
        .deployer
        .deploy(first_activity_id(&pairs), &base)
        .await
        .map_err(ApiError::in_query)
}

/// POST /analytics
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn analytics(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<AnalyticsRecord>>, ApiError> {
    let request: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::in_body(ProviderError::InvalidRequestBody(e.to_string())))?;
    let activity_id = body_activity_id(&request).map_err(ApiError::in_body)?;
    debug!(%activity_id, "Analytics requested");

    let records = state
        .registry
        .get_analytics(&activity_id)
        .await
        .map_err(|e| ApiError::in_body(e.into()))?;
    Ok(Json(records))
}

/// GET /runtime/{activity_id}
///
/// Locators handed out by `/deploy` point here, but no student-facing runtime exists yet.
pub async fn runtime_placeholder(Path(activity_id): Path<String>) -> impl IntoResponse {
    debug!(%activity_id, "Runtime requested");
    (
        StatusCode::NOT_IMPLEMENTED,
        format!("Runtime for activity {activity_id} is not implemented yet."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_query_value_wins() {
        let query = pairs(&[("other", "x"), ("activityID", "CLASS1"), ("activityID", "NAV2")]);
        assert_eq!(first_activity_id(&query), Some("CLASS1"));
        assert_eq!(first_activity_id(&pairs(&[("other", "x")])), None);
        assert_eq!(first_activity_id(&pairs(&[("activityID", "")])), Some(""));
    }

    #[test]
    fn truthy_scalars_are_accepted_as_text() {
        assert_eq!(body_activity_id(&json!({"activityID": "NAV1"})).unwrap(), "NAV1");
        assert_eq!(body_activity_id(&json!({"activityID": 42})).unwrap(), "42");
        assert_eq!(body_activity_id(&json!({"activityID": 1.5})).unwrap(), "1.5");
        assert_eq!(body_activity_id(&json!({"activityID": true})).unwrap(), "true");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for body in [
            json!({}),
            json!({"activityID": null}),
            json!({"activityID": ""}),
            json!({"activityID": 0}),
            json!({"activityID": false}),
        ] {
            assert_eq!(body_activity_id(&body), Err(ProviderError::MissingActivityId), "{body}");
        }
    }

    #[test]
    fn structured_ids_and_non_objects_are_invalid() {
        assert!(matches!(
            body_activity_id(&json!({"activityID": ["CLASS1"]})),
            Err(ProviderError::InvalidRequestBody(_))
        ));
        assert!(matches!(
            body_activity_id(&json!(["CLASS1"])),
            Err(ProviderError::InvalidRequestBody(_))
        ));
    }
}
