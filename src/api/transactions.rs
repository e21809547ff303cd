// src/api/transactions.rs
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::AppState;
use crate::connectors::traits::TransactionSource;
use crate::types::{Direction, Transaction, TransactionStatus};
use crate::utils::money::fmt_usd;

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 500;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub direction: Option<Direction>,
    pub status: Option<TransactionStatus>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Transaction>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    Json(
        state
            .transactions
            .list(limit, query.direction, query.status)
            .await,
    )
}

#[derive(Debug, Deserialize)]
pub struct RegenerateQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RegenerateReport {
    pub message: String,
    pub count: usize,
    pub total_inflow_amount: i64,
    pub total_outflow_amount: i64,
    pub net_amount: i64,
}

/// Replaces the in-memory store with freshly randomised test data.
pub async fn regenerate(
    State(state): State<AppState>,
    Query(query): Query<RegenerateQuery>,
) -> Json<RegenerateReport> {
    let count = query.count.unwrap_or(28).clamp(5, 100);
    let fresh = state.transactions.regenerate(count).await;

    // Raw per-direction sums of the generated data (amounts are unsigned).
    let total_inflow: i64 = fresh
        .iter()
        .filter(|tx| tx.direction == Direction::Inbound)
        .map(|tx| tx.amount)
        .sum();
    let total_outflow: i64 = fresh
        .iter()
        .filter(|tx| tx.direction == Direction::Outbound)
        .map(|tx| tx.amount)
        .sum();

    info!(
        "Regenerated {} transactions, net {}",
        fresh.len(),
        fmt_usd(total_inflow - total_outflow)
    );

    Json(RegenerateReport {
        message: format!("Regenerated {} test transactions", fresh.len()),
        count: fresh.len(),
        total_inflow_amount: total_inflow,
        total_outflow_amount: total_outflow,
        net_amount: total_inflow - total_outflow,
    })
}
