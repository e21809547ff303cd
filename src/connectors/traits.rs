// src/connectors/traits.rs
use async_trait::async_trait;

use crate::types::{Direction, Transaction, TransactionStatus};

/// Read-only capability over the transaction collection.
///
/// The aggregation engine and the copilot depend on this seam, never on a
/// concrete store, so tests can inject fixed fixtures. Implementations must
/// return an owned snapshot; callers iterate it without holding any lock.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn list(
        &self,
        limit: usize,
        direction: Option<Direction>,
        status: Option<TransactionStatus>,
    ) -> Vec<Transaction>;
}
