//! A2A protocol routes.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use futures_util::StreamExt;
use serde_json::Value;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;
use wayfare_a2a::{DispatchOutcome, Dispatcher, encoder};
use wayfare_observability::spans;

use crate::card::{self, AgentCard};

/// State shared across all routes.
#[derive(Clone)]
pub struct ServerState {
    pub dispatcher: Arc<Dispatcher>,
    pub base_url: String,
}

pub fn create_routes(state: ServerState) -> Router {
    Router::new()
        .route("/v1", post(rpc_endpoint))
        .route("/.well-known/agent-card.json", get(agent_card))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// The single JSON-RPC endpoint. `message/send` answers with a JSON body;
/// `message/sendSubscribe` answers with an SSE stream whose last frame
/// carries `final: true`.
async fn rpc_endpoint(State(state): State<ServerState>, Json(body): Json<Value>) -> Response {
    match state.dispatcher.dispatch(body).await {
        DispatchOutcome::Response(value) => Json(value).into_response(),
        DispatchOutcome::Stream { events } => {
            let frames = ReceiverStream::new(events).map(|event| {
                let frame = encoder::encode_frame(&event).unwrap_or_else(|err| {
                    tracing::error!(error = %err, "failed to encode status update");
                    String::new()
                });
                Ok::<_, Infallible>(frame)
            });
            match Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, encoder::SSE_CONTENT_TYPE)
                .header(header::CACHE_CONTROL, "no-cache")
                .body(Body::from_stream(frames))
            {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(error = %err, "failed to build stream response");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
    }
}

async fn agent_card(State(state): State<ServerState>) -> Json<AgentCard> {
    let span = spans::agent_card(&state.base_url);
    let _guard = span.enter();
    Json(card::travel_agent_card(&state.base_url))
}

async fn healthz() -> &'static str {
    "ok"
}
