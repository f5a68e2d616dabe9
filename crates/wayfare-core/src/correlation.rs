//! Correlation ID propagation for async invocation flows.
//!
//! The correlation ID ties log spans to the JSON-RPC request that caused
//! them; it defaults to the caller-supplied request id when one exists.

use crate::ids::CorrelationId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

tokio::task_local! {
    static CORRELATION_ID: CorrelationId;
}

static CORRELATION_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn generate_correlation_id() -> CorrelationId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = CORRELATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    CorrelationId::new(format!("corr-{}-{}", millis, counter))
}

pub fn current_correlation_id() -> Option<CorrelationId> {
    CORRELATION_ID.try_with(|id| id.clone()).ok()
}

pub async fn with_correlation_id<F, T>(id: CorrelationId, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    CORRELATION_ID.scope(id, fut).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_correlation_id();
        let b = generate_correlation_id();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn correlation_id_is_scoped_to_the_task() {
        assert!(current_correlation_id().is_none());
        let id = CorrelationId::from("corr-fixed");
        let seen = with_correlation_id(id.clone(), async { current_correlation_id() }).await;
        assert_eq!(seen, Some(id));
        assert!(current_correlation_id().is_none());
    }
}
