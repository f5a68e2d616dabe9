//! A2A protocol adapter.
//!
//! Dispatches JSON-RPC calls to a synchronous or streaming handling mode,
//! classifies an agent's chunked output into task-lifecycle phases, and
//! encodes the resulting status updates as server-sent event frames.

pub mod accumulator;
pub mod agent;
pub mod aggregator;
pub mod classifier;
pub mod dispatcher;
pub mod encoder;
pub mod rpc;
pub mod types;

pub use agent::{AgentChunk, ScriptedAgent, TravelAgent};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use rpc::RpcMethod;
