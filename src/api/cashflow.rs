// src/api/cashflow.rs
use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::api::AppState;
use crate::connectors::traits::TransactionSource;
use crate::core::engine;
use crate::types::CashFlowSummary;

/// Large enough to approximate "all transactions"; the engine applies its own
/// date filtering on top.
const SNAPSHOT_LIMIT: usize = 500;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Defaults to a trailing 90-day window ending today when the caller leaves
/// the range unspecified.
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Json<CashFlowSummary> {
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let start = query.start_date.unwrap_or(end - Duration::days(90));

    let snapshot = state.transactions.list(SNAPSHOT_LIMIT, None, None).await;
    Json(engine::summarize(&snapshot, start, end))
}
