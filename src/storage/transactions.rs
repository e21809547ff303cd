// src/storage/transactions.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::connectors::traits::TransactionSource;
use crate::types::{Direction, Transaction, TransactionStatus};

// ── Data-generation pools (used by regenerate) ──
const INBOUND_COUNTERPARTIES: &[&str] = &[
    "Stripe Payout",
    "Acme Corp",
    "Beta LLC",
    "Startup XYZ",
    "GlobalTech Inc",
    "Refund Reversal",
    "Partner Revenue",
    "Marketplace Settlement",
    "Subscription Revenue",
    "Invoice Payment",
];
const OUTBOUND_COUNTERPARTIES: &[&str] = &[
    "AWS",
    "Google Cloud",
    "Payroll",
    "Vendor A",
    "Vendor B",
    "Tax Reserve",
    "Stripe Fees",
    "Domain Registrar",
    "SaaS Tools",
    "Marketing Spend",
    "Office Supplies",
    "Insurance",
];
const INBOUND_DESCRIPTIONS: &[&str] = &[
    "Weekly payout",
    "Invoice payment",
    "Subscription revenue",
    "Partner settlement",
    "Marketplace earnings",
    "Customer payment",
    "Chargeback reversal",
    "Wire transfer received",
];
const OUTBOUND_DESCRIPTIONS: &[&str] = &[
    "Infrastructure costs",
    "Monthly SaaS subscription",
    "Contractor payment",
    "Platform fees",
    "Quarterly estimated tax",
    "Annual renewal",
    "Processing fees",
    "Marketing campaign",
    "Office rent",
    "Insurance premium",
];
// Weighted 4:1:1 toward completed.
const STATUS_POOL: &[TransactionStatus] = &[
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Pending,
    TransactionStatus::Failed,
];

/// In-memory transaction store, newest first. Explicitly owned and injected
/// into its consumers; `list` hands out owned snapshots so a concurrent
/// `regenerate` can never be observed mid-aggregation.
pub struct TransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Store pre-loaded with the fixed six-transaction sample.
    pub fn seeded() -> Self {
        Self {
            transactions: RwLock::new(seed_transactions()),
        }
    }

    /// Store with a caller-supplied fixture, for deterministic tests.
    pub fn with_transactions(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Self {
            transactions: RwLock::new(transactions),
        }
    }

    /// Replaces the contents with freshly randomised test transactions over
    /// the trailing 60 days and returns the new snapshot.
    pub async fn regenerate(&self, count: usize) -> Vec<Transaction> {
        let fresh = generate_transactions(count);
        let mut guard = self.transactions.write().await;
        *guard = fresh.clone();
        fresh
    }
}

#[async_trait]
impl TransactionSource for TransactionStore {
    async fn list(
        &self,
        limit: usize,
        direction: Option<Direction>,
        status: Option<TransactionStatus>,
    ) -> Vec<Transaction> {
        let guard = self.transactions.read().await;
        guard
            .iter()
            .filter(|tx| direction.map_or(true, |d| tx.direction == d))
            .filter(|tx| status.map_or(true, |s| tx.status == s))
            .take(limit)
            .cloned()
            .collect()
    }
}

fn seed_transactions() -> Vec<Transaction> {
    let samples: &[(i64, Direction, &str)] = &[
        (10_000, Direction::Inbound, "Acme Corp"),
        (-4_500, Direction::Outbound, "Vendor A"),
        (20_000, Direction::Inbound, "Stripe payout"),
        (-12_000, Direction::Outbound, "Vendor B"),
        (5_000, Direction::Inbound, "Refund reversal"),
        (-3_000, Direction::Outbound, "Fee"),
    ];

    let mut out: Vec<Transaction> = samples
        .iter()
        .enumerate()
        .map(|(i, (amount, direction, counterparty))| Transaction {
            id: Uuid::new_v4(),
            amount: *amount,
            currency: "USD".to_string(),
            direction: *direction,
            counterparty: Some((*counterparty).to_string()),
            description: Some(format!("Sample payment {}", i + 1)),
            status: TransactionStatus::Completed,
            occurred_at: sample_timestamp(1 + (i as u32 % 28)),
            updated_at: None,
            external_id: Some(format!("ext_{i}")),
        })
        .collect();

    out.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    out
}

fn sample_timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn generate_transactions(count: usize) -> Vec<Transaction> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let days_ago = rng.gen_range(0..60);
        let day = (now - Duration::days(days_ago)).date_naive();
        // Business-ish hours.
        let occurred = day
            .and_hms_opt(rng.gen_range(6..=22), rng.gen_range(0..60), 0)
            .unwrap_or_else(|| day.and_time(NaiveTime::MIN))
            .and_utc();

        let inbound = rng.gen_bool(0.6);
        let (direction, amount, counterparty, description) = if inbound {
            let amount = match rng.gen_range(0..3) {
                0 => rng.gen_range(5_000..50_000),
                1 => rng.gen_range(50_000..250_000),
                _ => rng.gen_range(250_000..500_000),
            };
            (
                Direction::Inbound,
                amount,
                pick(&mut rng, INBOUND_COUNTERPARTIES),
                pick(&mut rng, INBOUND_DESCRIPTIONS),
            )
        } else {
            let amount = match rng.gen_range(0..3) {
                0 => rng.gen_range(1_000..15_000),
                1 => rng.gen_range(15_000..80_000),
                _ => rng.gen_range(80_000..250_000),
            };
            (
                Direction::Outbound,
                amount,
                pick(&mut rng, OUTBOUND_COUNTERPARTIES),
                pick(&mut rng, OUTBOUND_DESCRIPTIONS),
            )
        };

        let status = STATUS_POOL
            .choose(&mut rng)
            .copied()
            .unwrap_or(TransactionStatus::Completed);

        out.push(Transaction {
            id: Uuid::new_v4(),
            amount,
            currency: "USD".to_string(),
            direction,
            counterparty: Some(counterparty.to_string()),
            description: Some(format!("{} - {}", description, occurred.format("%b %d"))),
            status,
            occurred_at: occurred,
            updated_at: None,
            external_id: Some(format!("gen_{}_{:04}", &direction.as_str()[..2], i)),
        });
    }

    out.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    out
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or("N/A")
}
