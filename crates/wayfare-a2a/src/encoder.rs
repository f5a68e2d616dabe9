//! Server-sent event framing for task status updates.
//!
//! Framing is append-only: one event is fully written before the next
//! begins, and the `final: true` frame is the last one on the wire.

use wayfare_core::Result;

use crate::types::TaskStatusUpdateEvent;

pub const SSE_CONTENT_TYPE: &str = "text/event-stream";

const DATA_PREFIX: &str = "data: ";
const FRAME_TERMINATOR: &str = "\n\n";

/// Encode one event as an SSE frame: `data: <json>\n\n`.
pub fn encode_frame(event: &TaskStatusUpdateEvent) -> Result<String> {
    let json = serde_json::to_string(event)?;
    Ok(format!("{DATA_PREFIX}{json}{FRAME_TERMINATOR}"))
}

/// Decode a single frame produced by [`encode_frame`]. Used by clients
/// and tests; the server never reads frames back.
pub fn decode_frame(frame: &str) -> Result<TaskStatusUpdateEvent> {
    let payload = frame
        .strip_prefix(DATA_PREFIX)
        .and_then(|rest| rest.strip_suffix(FRAME_TERMINATOR))
        .ok_or_else(|| {
            wayfare_core::WayfareError::Internal("malformed SSE frame".to_string())
        })?;
    Ok(serde_json::from_str(payload)?)
}
