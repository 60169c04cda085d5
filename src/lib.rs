//! # Activity Provider
//!
//! > **Robotic-mission activities for an Inven!RA-style learning platform.**
//!
//! The platform deploys an activity by identifier; this crate picks a mission template for
//! it, records the mission's initial state and seeds per-student analytics, then answers
//! the platform's JSON queries about that activity.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Missions ([`mission`])
//! - **Role**: the [`Mission`](mission::Mission) trait, its two variants and the
//!   [`MissionFactory`](mission::MissionFactory) that picks one from an identifier.
//!
//! ### 2. The Engine ([`framework`])
//! - **Role**: a generic [`ResourceActor`](framework::ResourceActor) that owns one piece of
//!   state and processes requests one at a time.
//!
//! ### 3. The Registry ([`registry_actor`], [`clients`])
//! - **Role**: the per-activity config and analytics mappings, owned by an actor and
//!   reached through [`RegistryClient`](clients::RegistryClient). Deployment writes both
//!   mappings in a single message, so readers never see one without the other.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: [`ProviderSystem`](lifecycle::ProviderSystem) starts and stops the actor;
//!   [`Deployer`](lifecycle::Deployer) runs factory → mission → registry.
//!
//! ### 5. The Interface ([`http`])
//! - **Role**: axum routes speaking the platform's contract.
//!
//! ## Concurrency Model
//!
//! The registry lives in a single Tokio task. Handlers hold cheap client clones and send it
//! messages; no lock guards the mappings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 5000
//! curl 'http://localhost:5000/deploy?activityID=CLASS101'
//! curl -X POST -d '{"activityID":"CLASS101"}' http://localhost:5000/analytics
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod mission;
pub mod model;
pub mod registry_actor;
