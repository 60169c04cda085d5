//! HTTP surface spoken to the deploying platform.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /` | [`handlers::root`] |
//! | `GET /status` | [`handlers::status`] |
//! | `GET /config` | [`handlers::config_form`] |
//! | `GET /json_params` | [`handlers::json_params`] |
//! | `GET /deploy` | [`handlers::deploy`] |
//! | `GET /analytics_list` | [`handlers::analytics_list`] |
//! | `POST /analytics` | [`handlers::analytics`] |
//! | `GET /runtime/{activity_id}` | [`handlers::runtime_placeholder`] |

pub mod config_page;
pub mod error;
pub mod handlers;

use crate::clients::RegistryClient;
use crate::config::ServerConfig;
use crate::lifecycle::{Deployer, ProviderSystem};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state accessible from handlers.
#[derive(Clone)]
pub struct AppState {
    pub deployer: Deployer,
    pub registry: RegistryClient,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(system: &ProviderSystem, config: ServerConfig) -> Self {
        Self {
            deployer: system.deployer.clone(),
            registry: system.registry_client.clone(),
            config: Arc::new(config),
        }
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/status", get(handlers::status))
        .route("/config", get(handlers::config_form))
        .route("/json_params", get(handlers::json_params))
        .route("/deploy", get(handlers::deploy))
        .route("/analytics_list", get(handlers::analytics_list))
        .route("/analytics", post(handlers::analytics))
        .route("/runtime/{activity_id}", get(handlers::runtime_placeholder))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
