//! Wayfare core types and shared utilities.

pub mod context;
pub mod correlation;
pub mod error;
pub mod ids;

pub use error::{Result, WayfareError};
pub use ids::{ContextId, CorrelationId, MessageId, TaskId};
