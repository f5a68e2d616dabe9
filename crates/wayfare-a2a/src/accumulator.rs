//! Ordered concatenation of streamed text fragments.

/// Accumulates text fragments in arrival order. No reordering, no
/// deduplication; an empty stream accumulates to the empty string.
#[derive(Debug, Default)]
pub struct ChunkAccumulator {
    buffer: String,
}

impl ChunkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_text(self) -> String {
        self.buffer
    }
}
