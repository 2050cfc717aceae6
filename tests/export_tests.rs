mod common;

use chrono::NaiveDate;
use common::{StubResolver, TestResult, all_commands, image_count, table_row_tops};
use folio::{
    AssetSource, ComposeOptions, DrawCommand, FinancialReport, FontWeight, Invoice, InvoiceLine,
    PlayerProfile, Transaction, TransactionKind, TransactionStatus, compose,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn contains_bold_text(document: &folio::Document, needle: &str) -> bool {
    all_commands(document).iter().any(|(_, command)| {
        matches!(
            command,
            DrawCommand::TextRun {
                content,
                weight: FontWeight::Bold,
                ..
            } if content.as_str() == needle
        )
    })
}

#[tokio::test]
async fn invoice_total_follows_the_line_quantity() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let invoice = Invoice::new("INV-2031", date(2026, 3, 1), date(2026, 3, 15), "Northbridge")
        .line(InvoiceLine::new("Training block", 2, 50.0));
    let document = compose(
        &invoice.to_blocks(),
        &StubResolver::new(),
        &ComposeOptions::default(),
    )
    .await?;
    assert_eq!(document.page_count(), 1);
    assert!(contains_bold_text(&document, "100.00"));

    let invoice = Invoice::new("INV-2031", date(2026, 3, 1), date(2026, 3, 15), "Northbridge")
        .line(InvoiceLine::new("Training block", 3, 50.0));
    let document = compose(
        &invoice.to_blocks(),
        &StubResolver::new(),
        &ComposeOptions::default(),
    )
    .await?;
    assert_eq!(document.page_count(), 1);
    assert!(contains_bold_text(&document, "150.00"));
    assert_eq!(invoice.filename(), "Invoice-INV-2031.pdf");
    Ok(())
}

#[tokio::test]
async fn forty_transactions_flow_onto_a_second_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let transactions: Vec<Transaction> = (0..40)
        .map(|index| Transaction {
            occurred_on: date(2026, 2, 1 + (index % 28)),
            kind: if index % 3 == 0 {
                TransactionKind::Expense
            } else {
                TransactionKind::Income
            },
            category: "Fees".to_string(),
            description: format!("Transaction {index}"),
            amount: 120.0,
            status: TransactionStatus::Completed,
        })
        .collect();
    let report = FinancialReport::new(date(2026, 2, 28), transactions);

    let document = compose(
        &report.to_blocks(),
        &StubResolver::new(),
        &ComposeOptions::default(),
    )
    .await?;

    // Header (18) + summary grid (24) + table header row leave the first
    // data row at y=70 on A4; 25 rows fit above the 277-unit bottom and
    // the remaining 15 continue from the top margin of page 2.
    assert_eq!(document.page_count(), 2);
    let second_page_rows = table_row_tops(&document, 1);
    assert_eq!(second_page_rows.len(), 15);
    assert_eq!(second_page_rows[0], 20.0);

    assert_eq!(report.filename(), "financial-transactions-2026-02-28.pdf");
    Ok(())
}

#[tokio::test]
async fn player_profile_exports_with_a_partially_failing_gallery() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut profile = PlayerProfile::new("Jo Flint", "Centre Back");
    profile.age = Some(24);
    profile.nationality = Some("Danish".to_string());
    profile.club = Some("Northbridge".to_string());
    profile.height_cm = Some(183);
    profile.weight_kg = Some(78);
    profile.preferred_foot = Some("Left".to_string());
    profile.email = Some("jo@example.com".to_string());
    profile.bio = "Reads the game well.".to_string();
    profile.career = "Northbridge academy graduate, first team since 2023.".to_string();
    profile.gallery = vec![
        AssetSource::new("https://cdn.example/p/1.png"),
        AssetSource::new("https://cdn.example/p/2.png"),
        AssetSource::new("https://cdn.example/p/3.png"),
    ];

    let resolver = StubResolver::failing(&["https://cdn.example/p/2.png"]);
    let document = compose(
        &profile.to_blocks(),
        &resolver,
        &ComposeOptions::default(),
    )
    .await?;

    // The failing middle image is omitted; the export still completes with
    // the two survivors packed together.
    assert_eq!(image_count(&document), 2);
    assert_eq!(
        resolver.calls(),
        vec![
            "https://cdn.example/p/1.png",
            "https://cdn.example/p/2.png",
            "https://cdn.example/p/3.png",
        ]
    );
    assert_eq!(profile.filename(), "Jo_Flint_Profile.pdf");
    Ok(())
}

#[tokio::test]
async fn domain_inputs_roundtrip_through_json() -> TestResult {
    let invoice = Invoice::new("INV-9", date(2026, 4, 2), date(2026, 4, 16), "Client")
        .line(InvoiceLine::new("Assessment", 1, 80.0));
    let json = serde_json::to_string(&invoice)?;
    let back: Invoice = serde_json::from_str(&json)?;
    assert_eq!(back, invoice);
    assert_eq!(back.total(), 80.0);
    Ok(())
}
