//! Axum HTTP binding for the Wayfare A2A adapter.
//!
//! One JSON-RPC endpoint that answers `message/send` synchronously and
//! `message/sendSubscribe` as a server-sent event stream, plus the
//! well-known agent card discovery document.

pub mod card;
pub mod config;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use routes::{ServerState, create_routes};
pub use server::WayfareServer;
