//! Span helpers.
//!
//! All span names use the `wayfare.` namespace prefix for low cardinality.

use tracing::Span;

/// Span for one synchronous JSON-RPC dispatch.
#[inline]
pub fn a2a_request(method: &str, correlation_id: &str) -> Span {
    tracing::info_span!(
        "wayfare.a2a_request",
        method = method,
        correlation_id = correlation_id,
    )
}

/// Span for one streaming JSON-RPC dispatch.
#[inline]
pub fn a2a_stream(method: &str, correlation_id: &str) -> Span {
    tracing::info_span!(
        "wayfare.a2a_stream",
        method = method,
        correlation_id = correlation_id,
    )
}

/// Span for serving the discovery document.
#[inline]
pub fn agent_card(base_url: &str) -> Span {
    tracing::debug_span!("wayfare.agent_card", base_url = base_url)
}
