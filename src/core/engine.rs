// src/core/engine.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{CashFlowPeriod, CashFlowSummary, Direction, Transaction};

#[derive(Debug, Default)]
struct DayBucket {
    inflow: i64,
    outflow: i64,
    count: u32,
}

/// Aggregates transactions into a date-bucketed cash flow summary over the
/// inclusive `[start, end]` range.
///
/// Pure and total: no I/O, no mutation of the input, no failure modes.
/// An inverted range (`start > end`) yields zero totals and no periods.
/// Status is deliberately not filtered; pending and failed transactions
/// aggregate like completed ones.
pub fn summarize(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> CashFlowSummary {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    let mut total_inflow: i64 = 0;
    let mut total_outflow: i64 = 0;

    for tx in transactions {
        let day = tx.occurred_at.date_naive();
        if day < start || day > end {
            continue;
        }
        let bucket = buckets.entry(day).or_default();
        match tx.direction {
            // Inbound counts toward inflow only when the stored amount is
            // positive; outbound takes abs() unconditionally. A non-positive
            // inbound still bumps the day's transaction_count. Kept exactly
            // as the source system behaves.
            Direction::Inbound if tx.amount > 0 => {
                bucket.inflow += tx.amount;
                total_inflow += tx.amount;
            }
            Direction::Inbound => {}
            Direction::Outbound => {
                bucket.outflow += tx.amount.abs();
                total_outflow += tx.amount.abs();
            }
        }
        bucket.count += 1;
    }

    // BTreeMap iteration gives ascending dates; days without transactions
    // never got a bucket, so gaps are omitted rather than zero-filled.
    let periods = buckets
        .into_iter()
        .map(|(day, bucket)| CashFlowPeriod {
            period_start: day,
            period_end: day,
            inflow_amount: bucket.inflow,
            outflow_amount: bucket.outflow,
            net_amount: bucket.inflow - bucket.outflow,
            transaction_count: bucket.count,
        })
        .collect();

    CashFlowSummary {
        start_date: start,
        end_date: end,
        total_inflow_amount: total_inflow,
        total_outflow_amount: total_outflow,
        net_amount: total_inflow - total_outflow,
        periods,
    }
}
