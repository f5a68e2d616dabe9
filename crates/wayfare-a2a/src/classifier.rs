//! Phase classifier for streamed agent output.
//!
//! A small edge-triggered state machine: each phase (tool invocation,
//! answer composition) announces itself at most once per stream, however
//! many chunks of that kind arrive. Stream exhaustion produces the single
//! terminal event.

use serde::Deserialize;
use wayfare_core::ids::{ContextId, TaskId};

use crate::agent::AgentChunk;
use crate::types::{Message, TaskState, TaskStatus, TaskStatusUpdateEvent};

pub const TOOL_PHASE_TEXT: &str = "Processing the trip plan (with plugins)...";
pub const MESSAGE_PHASE_TEXT: &str = "Building the trip plan...";
pub const FALLBACK_TEXT: &str =
    "We are unable to process your request at the moment. Please try again.";

/// The structured final payload the agent is expected to emit as its
/// accumulated answer. Anything that does not parse as this schema is a
/// failure; acceptance is deliberately not widened beyond it.
#[derive(Debug, Deserialize)]
struct FinalPayload {
    status: FinalStatus,
    message: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FinalStatus {
    InputRequired,
    Completed,
    Error,
}

impl FinalStatus {
    fn task_state(self) -> TaskState {
        match self {
            FinalStatus::Completed => TaskState::Completed,
            FinalStatus::InputRequired => TaskState::InputRequired,
            FinalStatus::Error => TaskState::Failed,
        }
    }
}

#[derive(Debug)]
pub struct PhaseClassifier {
    task_id: TaskId,
    context_id: ContextId,
    tool_announced: bool,
    message_announced: bool,
}

impl PhaseClassifier {
    pub fn new(task_id: TaskId, context_id: ContextId) -> Self {
        Self {
            task_id,
            context_id,
            tool_announced: false,
            message_announced: false,
        }
    }

    /// Inspect one chunk, emitting at most one `working` announcement on
    /// the first entry into each phase.
    pub fn observe(&mut self, chunk: &AgentChunk) -> Option<TaskStatusUpdateEvent> {
        match chunk {
            AgentChunk::ToolSignal => {
                if self.tool_announced {
                    return None;
                }
                self.tool_announced = true;
                Some(self.working_event(TOOL_PHASE_TEXT))
            }
            AgentChunk::Text(_) => {
                if self.message_announced {
                    return None;
                }
                self.message_announced = true;
                Some(self.working_event(MESSAGE_PHASE_TEXT))
            }
        }
    }

    /// Classify the accumulated text into the terminal event. This is the
    /// only event in the stream with `final = true`.
    pub fn finish(self, accumulated: &str) -> TaskStatusUpdateEvent {
        let (state, text) = match serde_json::from_str::<FinalPayload>(accumulated) {
            Ok(payload) => (payload.status.task_state(), payload.message),
            Err(_) => (TaskState::Failed, FALLBACK_TEXT.to_string()),
        };
        self.event(state, &text, true)
    }

    /// Terminal failure event for an invocation that never produced a
    /// usable stream (collaborator error or timeout).
    pub fn failure_event(task_id: TaskId, context_id: ContextId) -> TaskStatusUpdateEvent {
        PhaseClassifier::new(task_id, context_id).event(TaskState::Failed, FALLBACK_TEXT, true)
    }

    fn working_event(&self, text: &str) -> TaskStatusUpdateEvent {
        self.event(TaskState::Working, text, false)
    }

    fn event(&self, state: TaskState, text: &str, is_final: bool) -> TaskStatusUpdateEvent {
        TaskStatusUpdateEvent {
            task_id: self.task_id.clone(),
            context_id: Some(self.context_id.clone()),
            status: TaskStatus::now(state, Some(Message::agent_text(text))),
            is_final,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PhaseClassifier {
        PhaseClassifier::new(TaskId::from("t-1"), ContextId::from("ctx-1"))
    }

    fn status_text(event: &TaskStatusUpdateEvent) -> &str {
        event
            .status
            .message
            .as_ref()
            .and_then(|m| m.first_text())
            .unwrap()
    }

    #[test]
    fn tool_announcement_fires_once() {
        let mut c = classifier();
        let first = c.observe(&AgentChunk::ToolSignal).unwrap();
        assert_eq!(first.status.state, TaskState::Working);
        assert_eq!(status_text(&first), TOOL_PHASE_TEXT);
        assert!(!first.is_final);
        for _ in 0..5 {
            assert!(c.observe(&AgentChunk::ToolSignal).is_none());
        }
    }

    #[test]
    fn message_announcement_fires_once_despite_interleaving() {
        let mut c = classifier();
        assert!(c.observe(&AgentChunk::ToolSignal).is_some());
        let first = c.observe(&AgentChunk::Text("a".into())).unwrap();
        assert_eq!(status_text(&first), MESSAGE_PHASE_TEXT);
        assert!(c.observe(&AgentChunk::ToolSignal).is_none());
        assert!(c.observe(&AgentChunk::Text("b".into())).is_none());
    }

    #[test]
    fn structured_completed_payload_becomes_completed_terminal() {
        let event = classifier().finish(r#"{"status":"completed","message":"Your itinerary is ready."}"#);
        assert!(event.is_final);
        assert_eq!(event.status.state, TaskState::Completed);
        assert_eq!(status_text(&event), "Your itinerary is ready.");
    }

    #[test]
    fn input_required_payload_keeps_its_status() {
        let event =
            classifier().finish(r#"{"status":"input_required","message":"Which city?"}"#);
        assert_eq!(event.status.state, TaskState::InputRequired);
        assert_eq!(status_text(&event), "Which city?");
    }

    #[test]
    fn error_payload_maps_to_failed() {
        let event = classifier().finish(r#"{"status":"error","message":"no route"}"#);
        assert_eq!(event.status.state, TaskState::Failed);
    }

    #[test]
    fn unparseable_text_fails_with_fallback() {
        let event = classifier().finish("free-form prose, not the schema");
        assert!(event.is_final);
        assert_eq!(event.status.state, TaskState::Failed);
        assert_eq!(status_text(&event), FALLBACK_TEXT);
    }

    #[test]
    fn empty_accumulation_fails_with_fallback() {
        let event = classifier().finish("");
        assert_eq!(event.status.state, TaskState::Failed);
        assert_eq!(status_text(&event), FALLBACK_TEXT);
    }
}
