//! Composes a financial transaction report spanning two pages.
//!
//! Run with `cargo run --example financial_report`.

use chrono::NaiveDate;
use folio::{
    CommandLogRenderer, ComposeOptions, DocumentRenderer, FinancialReport, InMemoryAssetResolver,
    Transaction, TransactionKind, TransactionStatus, compose,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let transactions: Vec<Transaction> = (0..40)
        .map(|index| {
            let expense = index % 3 == 0;
            Transaction {
                occurred_on: NaiveDate::from_ymd_opt(2026, 2, 1 + (index % 28))
                    .expect("valid date"),
                kind: if expense {
                    TransactionKind::Expense
                } else {
                    TransactionKind::Income
                },
                category: if expense { "Equipment" } else { "Fees" }.to_string(),
                description: format!("Transaction {index}"),
                amount: 120.0,
                status: TransactionStatus::Completed,
            }
        })
        .collect();
    let report = FinancialReport::new(
        NaiveDate::from_ymd_opt(2026, 2, 28).expect("valid date"),
        transactions,
    );

    let resolver = InMemoryAssetResolver::new();
    let document = compose(&report.to_blocks(), &resolver, &ComposeOptions::default()).await?;

    let mut out = Vec::new();
    CommandLogRenderer::new().render_document(&document, &mut out)?;
    print!("{}", String::from_utf8_lossy(&out));

    println!(
        "-- {} page(s), profit {:.2}, would save as {}",
        document.page_count(),
        report.profit(),
        report.filename()
    );
    Ok(())
}
