//! Server assembly and startup.

use std::sync::Arc;

use axum::Router;
use wayfare_a2a::{Dispatcher, TravelAgent};

use crate::config::ServerConfig;
use crate::routes::{ServerState, create_routes};

/// A2A protocol server. The agent collaborator is injected once, at
/// construction, and lives for the process lifetime.
pub struct WayfareServer {
    state: ServerState,
    config: ServerConfig,
}

impl WayfareServer {
    pub fn new(agent: Arc<dyn TravelAgent>, config: ServerConfig) -> Self {
        let state = ServerState {
            dispatcher: Arc::new(Dispatcher::new(agent)),
            base_url: config.base_url.clone(),
        };
        Self { state, config }
    }

    /// Convert the server into an Axum router, for embedding or tests.
    pub fn into_router(self) -> Router {
        create_routes(self.state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.config.bind).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "A2A server listening");
        tracing::info!(
            "agent card available at http://{}/.well-known/agent-card.json",
            local_addr
        );
        axum::serve(listener, self.into_router()).await
    }
}
