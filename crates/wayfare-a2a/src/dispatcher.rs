//! JSON-RPC dispatcher.
//!
//! Maps an inbound method call to the synchronous or streaming handling
//! mode. All failures are converted to JSON-RPC error envelopes (or a
//! terminal failure event in streaming mode) here; nothing propagates to
//! the transport layer unconverted.

use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;
use wayfare_core::ids::{ContextId, CorrelationId, TaskId};
use wayfare_core::{Result, WayfareError, context, correlation};
use wayfare_observability::spans;

use crate::agent::TravelAgent;
use crate::aggregator;
use crate::rpc::{self, JsonRpcId, RpcMethod};
use crate::types::{Message, SendMessageParams, Task, TaskState, TaskStatus, TaskStatusUpdateEvent};

/// What the transport layer should do with one dispatched call.
pub enum DispatchOutcome {
    /// A complete JSON-RPC response body (success or error envelope).
    Response(Value),
    /// A streamed call: the events terminate with exactly one final event,
    /// to be framed by the event encoder. Frames carry no JSON-RPC
    /// envelope, so the request id plays no further part.
    Stream {
        events: mpsc::Receiver<TaskStatusUpdateEvent>,
    },
}

/// Stateless request dispatcher. The agent collaborator is injected at
/// construction and shared across requests; per-request state lives in
/// the aggregator each streamed call owns.
pub struct Dispatcher {
    agent: Arc<dyn TravelAgent>,
}

impl Dispatcher {
    pub fn new(agent: Arc<dyn TravelAgent>) -> Self {
        Self { agent }
    }

    pub async fn dispatch(&self, body: Value) -> DispatchOutcome {
        let request_id = rpc::extract_id(&body);

        let request = match rpc::parse_request(body) {
            Ok(request) => request,
            Err(err) => return Self::error_outcome(request_id, &err),
        };

        let method = match request.method.parse::<RpcMethod>() {
            Ok(method) => method,
            Err(err) => return Self::error_outcome(request_id, &err),
        };

        let params = match Self::parse_params(request.params) {
            Ok(params) => params,
            Err(err) => return Self::error_outcome(request_id, &err),
        };

        let correlation_id = request_id
            .as_ref()
            .map(|id| CorrelationId::from(id_to_string(id)))
            .unwrap_or_else(correlation::generate_correlation_id);
        let context_id = params.context_id.clone();

        let span = match method {
            RpcMethod::MessageSend => {
                spans::a2a_request(method.as_str(), correlation_id.as_str())
            }
            RpcMethod::MessageSendSubscribe => {
                spans::a2a_stream(method.as_str(), correlation_id.as_str())
            }
        };

        correlation::with_correlation_id(correlation_id, async move {
            context::with_context_id(context_id, async move {
                match method {
                    RpcMethod::MessageSend => self.handle_send(request_id, params).await,
                    RpcMethod::MessageSendSubscribe => self.handle_send_subscribe(params).await,
                }
            })
            .await
        })
        .instrument(span)
        .await
    }

    async fn handle_send(
        &self,
        request_id: Option<JsonRpcId>,
        params: ValidParams,
    ) -> DispatchOutcome {
        match self
            .agent
            .send_message(&params.user_text, &params.context_id)
            .await
        {
            Ok(answer) => {
                let task = Self::completed_task(&params, answer);
                DispatchOutcome::Response(rpc::success_response(request_id, json!({ "task": task })))
            }
            Err(err) => {
                tracing::warn!(error = %err, "agent invocation failed");
                let err = match err {
                    WayfareError::AgentFailure(_) => err,
                    other => WayfareError::AgentFailure(other.to_string()),
                };
                Self::error_outcome(request_id, &err)
            }
        }
    }

    async fn handle_send_subscribe(&self, params: ValidParams) -> DispatchOutcome {
        let events = match self
            .agent
            .stream_message(&params.user_text, &params.context_id)
            .await
        {
            Ok(chunks) => aggregator::aggregate(params.task_id, params.context_id, chunks),
            Err(err) => {
                // Streaming failures surface as a terminal failed event,
                // never as an unterminated stream.
                tracing::warn!(error = %err, "streaming agent invocation failed");
                aggregator::failure(params.task_id, params.context_id)
            }
        };
        DispatchOutcome::Stream { events }
    }

    fn parse_params(params: Option<Value>) -> Result<ValidParams> {
        let value = params.ok_or_else(|| WayfareError::InvalidParams("missing params".into()))?;
        let params: SendMessageParams = serde_json::from_value(value)
            .map_err(|err| WayfareError::InvalidParams(err.to_string()))?;

        let session_id = params
            .session_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| WayfareError::InvalidParams("missing sessionId".into()))?;

        let user_text = params
            .message
            .first_text()
            .ok_or_else(|| WayfareError::InvalidParams("message has no text part".into()))?
            .to_string();

        Ok(ValidParams {
            context_id: ContextId::from(session_id),
            task_id: TaskId::from(params.message.message_id.as_str()),
            user_text,
            message: params.message,
        })
    }

    fn completed_task(params: &ValidParams, answer: String) -> Task {
        let mut reply = Message::agent_text(answer);
        reply.context_id = Some(params.context_id.clone());
        reply.task_id = Some(params.task_id.clone());
        Task {
            id: params.task_id.clone(),
            status: TaskStatus::now(TaskState::Completed, Some(reply)),
            context_id: Some(params.context_id.clone()),
            history: Some(vec![params.message.clone()]),
            artifacts: None,
        }
    }

    fn error_outcome(id: Option<JsonRpcId>, err: &WayfareError) -> DispatchOutcome {
        let (code, message, data) = rpc::map_rpc_error(err);
        DispatchOutcome::Response(rpc::error_response(id, code, message, data))
    }
}

struct ValidParams {
    context_id: ContextId,
    task_id: TaskId,
    user_text: String,
    message: Message,
}

fn id_to_string(id: &JsonRpcId) -> String {
    match id {
        JsonRpcId::String(s) => s.clone(),
        JsonRpcId::Integer(n) => n.to_string(),
        JsonRpcId::Null => "null".to_string(),
    }
}
