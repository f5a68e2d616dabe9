//! Runs the A2A server with a scripted agent, for protocol-level smoke
//! testing with curl:
//!
//! ```sh
//! cargo run --example scripted_server
//! curl -s http://127.0.0.1:10020/.well-known/agent-card.json
//! ```

use std::sync::Arc;
use wayfare_a2a::{AgentChunk, ScriptedAgent};
use wayfare_axum::{ServerConfig, WayfareServer};
use wayfare_observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let agent = ScriptedAgent::new(
        "Day one: Gyeongbokgung, then Bukchon; exchange cash near Myeongdong.",
        vec![
            AgentChunk::ToolSignal,
            AgentChunk::Text(r#"{"status":"completed","message":"#.to_string()),
            AgentChunk::Text(
                r#""Day one: Gyeongbokgung, then Bukchon; exchange cash near Myeongdong."}"#
                    .to_string(),
            ),
        ],
    );

    let server = WayfareServer::new(Arc::new(agent), ServerConfig::from_env());
    server.serve().await?;
    Ok(())
}
