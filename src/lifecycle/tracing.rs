//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`). Verbosity comes
//! from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run                       # full action payloads
//! RUST_LOG=activity_provider=debug,tower_http=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown and final registry size
//! - **Registry actions**: `Register` at `info`, every action payload at `debug`
//! - **Deployments**: runtime URL and mission kind, plus a `warn` when the default
//!   mission is used for an unrecognized identifier
//! - **HTTP requests**: spans from `tower_http::trace::TraceLayer`
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="ActivityRegistry"
//! INFO deploy: Registered activity_id=CLASS101 mission_type=ClassificationMission size=1
//! INFO deploy: Activity deployed kind=ClassificationMission runtime_url=http://localhost:5000/runtime/CLASS101
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
