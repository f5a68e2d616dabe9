//! The agent collaborator seam.
//!
//! The adapter never talks to a model directly; it is handed a
//! [`TravelAgent`] at construction time and drives it through this trait.

use async_trait::async_trait;
use tokio::sync::mpsc;
use wayfare_core::Result;
use wayfare_core::ids::ContextId;

/// Capacity of the chunk channel between the collaborator task and the
/// adapter. Bounded so a slow transport back-pressures the producer.
pub const CHUNK_CHANNEL_CAPACITY: usize = 32;

/// One unit of incremental agent output, classified at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentChunk {
    /// The agent invoked a tool or received a tool result.
    ToolSignal,
    /// An incremental fragment of the answer text, in arrival order.
    Text(String),
}

/// A conversational task-execution agent.
///
/// Implementations own their conversation-thread state, keyed by the
/// context id, and their own timeout policy. At most one in-flight use
/// per context id is assumed.
#[async_trait]
pub trait TravelAgent: Send + Sync {
    /// Answer one prompt synchronously, returning the final answer text.
    async fn send_message(&self, user_text: &str, context_id: &ContextId) -> Result<String>;

    /// Open a streaming invocation. The agent pushes [`AgentChunk`]s into
    /// the returned channel from its own task; closing the channel marks
    /// stream exhaustion. Dropping the receiver cancels the invocation.
    async fn stream_message(
        &self,
        user_text: &str,
        context_id: &ContextId,
    ) -> Result<mpsc::Receiver<AgentChunk>>;
}

/// An agent that replays a fixed chunk script. Used by the tests and the
/// server example; real deployments inject their own implementation.
pub struct ScriptedAgent {
    answer: String,
    script: Vec<AgentChunk>,
}

impl ScriptedAgent {
    pub fn new(answer: impl Into<String>, script: Vec<AgentChunk>) -> Self {
        Self {
            answer: answer.into(),
            script,
        }
    }
}

#[async_trait]
impl TravelAgent for ScriptedAgent {
    async fn send_message(&self, _user_text: &str, _context_id: &ContextId) -> Result<String> {
        Ok(self.answer.clone())
    }

    async fn stream_message(
        &self,
        _user_text: &str,
        _context_id: &ContextId,
    ) -> Result<mpsc::Receiver<AgentChunk>> {
        let (tx, rx) = mpsc::channel(CHUNK_CHANNEL_CAPACITY);
        let script = self.script.clone();
        tokio::spawn(async move {
            for chunk in script {
                // Receiver gone means the client disconnected; stop producing.
                if tx.send(chunk).await.is_err() {
                    break;
                }
            }
        });
        Ok(rx)
    }
}
