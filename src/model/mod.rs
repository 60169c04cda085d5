//! Pure data structures stored in the registry and exchanged with the platform.

pub mod activity;
pub mod analytics;

pub use activity::*;
pub use analytics::*;
