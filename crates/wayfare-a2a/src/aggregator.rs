//! Stream aggregation over one streaming collaborator invocation.
//!
//! Consumes the collaborator's chunk channel, drives the phase classifier
//! and chunk accumulator, and forwards the resulting status-update events
//! into a bounded outbound channel. Back-pressure is channel capacity on
//! both sides; a closed outbound channel (client disconnect) stops the
//! pull from the collaborator.

use tokio::sync::mpsc;
use tracing::Instrument;
use wayfare_core::ids::{ContextId, TaskId};

use crate::accumulator::ChunkAccumulator;
use crate::agent::AgentChunk;
use crate::classifier::PhaseClassifier;
use crate::types::TaskStatusUpdateEvent;

/// Capacity of the outbound event channel. Event volume is bounded by the
/// edge-triggered classifier, so a small buffer suffices.
pub const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Aggregate one chunk stream into a lazy event sequence.
///
/// The returned receiver yields zero or more `working` events followed by
/// exactly one terminal event, after which the channel closes.
pub fn aggregate(
    task_id: TaskId,
    context_id: ContextId,
    mut chunks: mpsc::Receiver<AgentChunk>,
) -> mpsc::Receiver<TaskStatusUpdateEvent> {
    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    // Keep the spawned task inside the dispatching request's span so its
    // logs stay correlated.
    let span = tracing::Span::current();
    tokio::spawn(
        async move {
            let mut classifier = PhaseClassifier::new(task_id, context_id);
            let mut accumulator = ChunkAccumulator::new();

            loop {
                let chunk = tokio::select! {
                    maybe_chunk = chunks.recv() => match maybe_chunk {
                        Some(chunk) => chunk,
                        None => break,
                    },
                    // Client went away; stop pulling and release the agent.
                    _ = tx.closed() => return,
                };
                if let AgentChunk::Text(fragment) = &chunk {
                    accumulator.push(fragment);
                }
                if let Some(event) = classifier.observe(&chunk) {
                    if tx.send(event).await.is_err() {
                        return;
                    }
                }
            }

            let terminal = classifier.finish(&accumulator.into_text());
            let _ = tx.send(terminal).await;
        }
        .instrument(span),
    );
    rx
}

/// A degenerate stream for invocations that failed before producing any
/// chunks: one terminal failure event.
pub fn failure(task_id: TaskId, context_id: ContextId) -> mpsc::Receiver<TaskStatusUpdateEvent> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(
        async move {
            let _ = tx
                .send(PhaseClassifier::failure_event(task_id, context_id))
                .await;
        }
        .instrument(tracing::Span::current()),
    );
    rx
}
