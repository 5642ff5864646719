//! Shared types for the BunLab site
//!
//! Common types used across crates: brand and menu records, reservation
//! records, availability results, response structures, and small utilities.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
