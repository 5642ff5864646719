//! Core Module
//!
//! 配置、状态、HTTP 服务器

pub mod config;
pub mod server;
pub mod state;

// Re-exports
pub use config::Config;
pub use server::Server;
pub use state::ServerState;
