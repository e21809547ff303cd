// src/types.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    /// Minor currency units (cents). Sign is stored as-is; `direction` is
    /// authoritative for inflow/outflow classification, not the sign.
    pub amount: i64,
    pub currency: String,
    pub direction: Direction,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub occurred_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub external_id: Option<String>,
}

/// One calendar day of aggregated cash flow. `period_start == period_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPeriod {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub inflow_amount: i64,
    pub outflow_amount: i64,
    pub net_amount: i64,
    pub transaction_count: u32,
}

/// Range totals plus per-day buckets, ascending, gap days omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_inflow_amount: i64,
    pub total_outflow_amount: i64,
    pub net_amount: i64,
    pub periods: Vec<CashFlowPeriod>,
}

// --- Inventory ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub sku: Option<String>,
    pub quantity: u32,
    pub low_stock_threshold: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub item_name: String,
    pub quantity: u32,
}

/// Payload for recording a sale that reduces inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySale {
    pub item_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySaleReceipt {
    pub item_id: Uuid,
    pub item_name: String,
    pub quantity_sold: u32,
    pub new_quantity: u32,
    pub low_stock_alert: Option<LowStockAlert>,
}

// --- Copilot ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotAsk {
    pub question: String,
    /// Optional extra context (e.g. date range). Passed through untouched.
    pub context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotAnswer {
    pub answer: String,
    pub sources_used: Vec<String>,
}
