// src/core/copilot.rs
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::connectors::openai::{CopilotError, OpenAiClient};
use crate::connectors::traits::TransactionSource;
use crate::core::engine;
use crate::types::{CopilotAnswer, Direction};
use crate::utils::money::fmt_usd;

/// Upper bound when snapshotting the store; approximates "all transactions".
const SNAPSHOT_LIMIT: usize = 500;

const SYSTEM_PROMPT: &str = "You are a helpful cash flow copilot for a payments system.\n\
Answer concisely using the provided payment data. Use dollars (e.g. $1,234.56) when mentioning amounts.\n\
You have access to the full list of payments including dates, amounts, counterparties, descriptions, and statuses.\n\
If the question cannot be answered from the data, say so and suggest what data would help.";

/// Answers natural-language questions by feeding the cash flow aggregates and
/// the raw transaction list to the language model.
pub struct CopilotService {
    source: Arc<dyn TransactionSource>,
    client: OpenAiClient,
}

impl CopilotService {
    pub fn new(source: Arc<dyn TransactionSource>, client: OpenAiClient) -> Self {
        Self { source, client }
    }

    pub async fn ask(&self, question: &str) -> Result<CopilotAnswer, CopilotError> {
        let data_context = self.build_data_context().await;
        let user_content = format!("Payment data:\n{data_context}\n\nQuestion: {question}");

        let answer = self.client.chat(SYSTEM_PROMPT, &user_content).await?;
        info!("Copilot answered ({} chars)", answer.len());

        Ok(CopilotAnswer {
            answer,
            sources_used: vec!["cashflow_summary".to_string()],
        })
    }

    /// Renders the full data context the model answers from: overall totals
    /// over the actual data range, then one line per transaction, newest
    /// first.
    async fn build_data_context(&self) -> String {
        let mut transactions = self.source.list(SNAPSHOT_LIMIT, None, None).await;
        if transactions.is_empty() {
            return "No payment data available.".to_string();
        }
        transactions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        let dates: Vec<NaiveDate> = transactions
            .iter()
            .map(|tx| tx.occurred_at.date_naive())
            .collect();
        let earliest = dates.iter().copied().min().unwrap_or_default();
        let latest = dates.iter().copied().max().unwrap_or_default();

        let summary = engine::summarize(&transactions, earliest, latest);

        let mut lines = vec![
            format!(
                "Data range: {} to {} ({} payments)",
                earliest,
                latest,
                transactions.len()
            ),
            format!("Total inflows: {}", fmt_usd(summary.total_inflow_amount)),
            format!("Total outflows: {}", fmt_usd(summary.total_outflow_amount)),
            format!("Net cash flow: {}", fmt_usd(summary.net_amount)),
            String::new(),
            "Individual payments:".to_string(),
        ];

        for tx in &transactions {
            let sign = match tx.direction {
                Direction::Inbound => "+",
                Direction::Outbound => "-",
            };
            lines.push(format!(
                "  {} | {}{} | {} | {} | {} | {}",
                tx.occurred_at.date_naive(),
                sign,
                fmt_usd(tx.amount.abs()),
                tx.direction.as_str(),
                tx.counterparty.as_deref().unwrap_or("N/A"),
                tx.description.as_deref().unwrap_or(""),
                tx.status.as_str(),
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::transactions::TransactionStore;
    use crate::types::{Transaction, TransactionStatus};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;
    use uuid::Uuid;

    fn tx(amount: i64, direction: Direction, day: &str, counterparty: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            amount,
            currency: "USD".to_string(),
            direction,
            counterparty: Some(counterparty.to_string()),
            description: Some("Test payment".to_string()),
            status: TransactionStatus::Completed,
            occurred_at: format!("{day}T09:30:00Z").parse().unwrap(),
            updated_at: None,
            external_id: None,
        }
    }

    fn fixture_service(base_url: &str) -> CopilotService {
        let store = Arc::new(TransactionStore::with_transactions(vec![
            tx(10_000, Direction::Inbound, "2025-01-01", "Acme Corp"),
            tx(-4_500, Direction::Outbound, "2025-01-01", "Vendor A"),
            tx(20_000, Direction::Inbound, "2025-01-02", "Stripe Payout"),
        ]));
        let client = OpenAiClient::new(base_url.to_string(), "sk-test".into(), "gpt-4o-mini".into());
        CopilotService::new(store, client)
    }

    #[tokio::test]
    async fn data_context_has_totals_and_per_transaction_lines() {
        let service = fixture_service("http://unused.invalid");
        let context = service.build_data_context().await;

        assert!(context.contains("Data range: 2025-01-01 to 2025-01-02 (3 payments)"));
        assert!(context.contains("Total inflows: $300.00"));
        assert!(context.contains("Total outflows: $45.00"));
        assert!(context.contains("Net cash flow: $255.00"));
        assert!(context.contains("2025-01-01 | -$45.00 | outbound | Vendor A"));

        // Newest first: the Jan 2 payment line comes before the Jan 1 ones.
        let jan2 = context.find("2025-01-02 | +$200.00").unwrap();
        let jan1 = context.find("2025-01-01 | +$100.00").unwrap();
        assert!(jan2 < jan1);
    }

    #[tokio::test]
    async fn empty_store_yields_placeholder_context() {
        let store = Arc::new(TransactionStore::with_transactions(vec![]));
        let client =
            OpenAiClient::new("http://unused.invalid".into(), "sk-test".into(), "gpt".into());
        let service = CopilotService::new(store, client);

        assert_eq!(service.build_data_context().await, "No payment data available.");
    }

    #[tokio::test]
    async fn ask_returns_answer_and_sources() {
        async fn completions(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
            // The request must carry the data context in the user message.
            let user = body["messages"][1]["content"].as_str().unwrap_or("");
            assert!(user.contains("Total inflows: $300.00"));
            assert!(user.contains("Question: what is my net cash flow?"));
            Json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "Your net cash flow is $255.00." } }
                ]
            }))
        }

        let app = Router::new().route("/chat/completions", post(completions));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let service = fixture_service(&format!("http://{addr}"));
        let response = service.ask("what is my net cash flow?").await.unwrap();

        assert_eq!(response.answer, "Your net cash flow is $255.00.");
        assert_eq!(response.sources_used, vec!["cashflow_summary".to_string()]);
    }
}
