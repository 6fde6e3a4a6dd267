//! # Quill API Server
//!
//! Actix-web HTTP surface for blog posts, plus the server lifecycle used by
//! the binary and the integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, StartupError, build_app, run_server, serve};
pub use state::AppState;
