//! Wire-level data shapes for the A2A task lifecycle.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use wayfare_core::ids::{ContextId, MessageId, TaskId};

/// One content fragment of a message. The `kind` discriminator is part of
/// the wire format; exactly one variant is populated per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    File {
        media_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_with_uri: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_with_bytes: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Data {
        data: HashMap<String, Value>,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// An A2A message. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
    pub message_id: MessageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<ContextId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

impl Message {
    /// Build an agent-role message holding a single text part.
    pub fn agent_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            parts: vec![Part::text(text)],
            message_id: MessageId::from(uuid::Uuid::new_v4().to_string()),
            context_id: None,
            task_id: None,
            metadata: None,
        }
    }

    /// The first text part, if any. Synchronous dispatch treats this as
    /// the user's prompt.
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Task lifecycle state. Transitions are monotonic; nothing leaves a
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    Submitted,
    Working,
    Completed,
    Failed,
    Cancelled,
    InputRequired,
    Rejected,
    AuthRequired,
}

impl TaskState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Failed | TaskState::Cancelled | TaskState::Rejected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub state: TaskState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    pub timestamp: String,
}

impl TaskStatus {
    /// Status stamped with the current UTC time in ISO-8601.
    pub fn now(state: TaskState, message: Option<Message>) -> Self {
        Self {
            state,
            message,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<ContextId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
}

/// One status update within a streamed call. Exactly one event per stream
/// carries `final = true`, and nothing follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdateEvent {
    pub task_id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<ContextId>,
    pub status: TaskStatus,
    #[serde(rename = "final")]
    pub is_final: bool,
}

/// Params carried by `message/send` and `message/sendSubscribe`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageParams {
    pub message: Message,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_round_trips_with_kind_tag() {
        let part = Part::text("hello");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["kind"], "text");
        assert_eq!(value["text"], "hello");
        let back: Part = serde_json::from_value(value).unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn task_state_uses_kebab_case_on_the_wire() {
        let value = serde_json::to_value(TaskState::InputRequired).unwrap();
        assert_eq!(value, "input-required");
        let value = serde_json::to_value(TaskState::AuthRequired).unwrap();
        assert_eq!(value, "auth-required");
    }

    #[test]
    fn terminal_states_are_closed() {
        for state in [
            TaskState::Completed,
            TaskState::Failed,
            TaskState::Cancelled,
            TaskState::Rejected,
        ] {
            assert!(state.is_terminal());
        }
        for state in [
            TaskState::Submitted,
            TaskState::Working,
            TaskState::InputRequired,
            TaskState::AuthRequired,
        ] {
            assert!(!state.is_terminal());
        }
    }

    #[test]
    fn first_text_skips_non_text_parts() {
        let message = Message {
            role: Role::User,
            parts: vec![
                Part::Data {
                    data: HashMap::new(),
                },
                Part::text("the prompt"),
            ],
            message_id: MessageId::from("m-1"),
            context_id: None,
            task_id: None,
            metadata: None,
        };
        assert_eq!(message.first_text(), Some("the prompt"));
    }

    #[test]
    fn status_update_event_serializes_final_flag() {
        let event = TaskStatusUpdateEvent {
            task_id: TaskId::from("t-1"),
            context_id: Some(ContextId::from("ctx-1")),
            status: TaskStatus::now(TaskState::Completed, None),
            is_final: true,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["final"], true);
        assert_eq!(value["taskId"], "t-1");
        assert_eq!(value["status"]["state"], "completed");
    }
}
