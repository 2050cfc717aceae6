//! Composes a sample invoice and dumps the resulting draw commands.
//!
//! Run with `cargo run --example invoice_export`.

use chrono::NaiveDate;
use folio::{
    CommandLogRenderer, ComposeOptions, DocumentRenderer, InMemoryAssetResolver, Invoice,
    InvoiceLine, compose,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let issued = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
    let due = NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date");
    let invoice = Invoice::new("INV-2031", issued, due, "Northbridge Academy")
        .line(InvoiceLine::new("Training block (8 sessions)", 2, 50.0))
        .line(InvoiceLine::new("Performance assessment", 1, 80.0))
        .line(InvoiceLine::new("Video analysis", 3, 25.0));

    let resolver = InMemoryAssetResolver::new();
    let document = compose(&invoice.to_blocks(), &resolver, &ComposeOptions::default()).await?;

    let mut out = Vec::new();
    CommandLogRenderer::new().render_document(&document, &mut out)?;
    print!("{}", String::from_utf8_lossy(&out));

    println!(
        "-- {} page(s), total {:.2}, would save as {}",
        document.page_count(),
        invoice.total(),
        invoice.filename()
    );
    Ok(())
}
