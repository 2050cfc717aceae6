//! Invoice export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use folio_blocks::{
    ContentBlock, HeaderBlock, InfoGridBlock, SectionBlock, TableBlock, TableColumn,
};

use super::{filename_component, money};

/// One billable line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl InvoiceLine {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// An invoice as produced by the billing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub number: String,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    pub bill_to_name: String,
    #[serde(default)]
    pub bill_to_email: Option<String>,
    #[serde(default)]
    pub bill_to_address: Option<String>,
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Invoice {
    pub fn new(
        number: impl Into<String>,
        issued_on: NaiveDate,
        due_on: NaiveDate,
        bill_to_name: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            issued_on,
            due_on,
            bill_to_name: bill_to_name.into(),
            bill_to_email: None,
            bill_to_address: None,
            lines: Vec::new(),
            notes: None,
        }
    }

    /// Appends a line item and returns the updated invoice.
    pub fn line(mut self, line: InvoiceLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Sum of all line amounts.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(InvoiceLine::amount).sum()
    }

    /// Maps the invoice onto the block model.
    pub fn to_blocks(&self) -> Vec<ContentBlock> {
        let header = HeaderBlock::new(format!("Invoice {}", self.number))
            .with_meta_line(format!("Date: {}", self.issued_on.format("%Y-%m-%d")))
            .with_meta_line(format!("Due: {}", self.due_on.format("%Y-%m-%d")));

        let bill_to = InfoGridBlock::new()
            .with_caption("Bill To")
            .entry("Name", self.bill_to_name.clone())
            .entry_opt("Email", self.bill_to_email.clone())
            .entry_opt("Address", self.bill_to_address.clone());

        let mut table = TableBlock::new(vec![
            TableColumn::new("Description", 0.5),
            TableColumn::new("Qty", 0.15).right_aligned(),
            TableColumn::new("Unit Price", 0.15).right_aligned(),
            TableColumn::new("Amount", 0.2).right_aligned(),
        ]);
        for line in &self.lines {
            table = table.row([
                line.description.clone(),
                line.quantity.to_string(),
                money(line.unit_price),
                money(line.amount()),
            ]);
        }
        table = table.with_footer(["Total".to_string(), String::new(), String::new(), money(self.total())]);

        let mut blocks = vec![
            ContentBlock::Header(header),
            ContentBlock::InfoGrid(bill_to),
            ContentBlock::Table(table),
        ];
        if let Some(notes) = &self.notes {
            blocks.push(ContentBlock::Section(SectionBlock::new("Notes", notes.clone())));
        }
        log::debug!("invoice {} mapped to {} blocks", self.number, blocks.len());
        blocks
    }

    /// `Invoice-{number}.pdf`
    pub fn filename(&self) -> String {
        format!("Invoice-{}.pdf", filename_component(&self.number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn invoice(quantity: u32) -> Invoice {
        Invoice::new("INV-2031", date(2026, 3, 1), date(2026, 3, 15), "Northbridge Academy")
            .line(InvoiceLine::new("Training block", quantity, 50.0))
    }

    #[test]
    fn total_row_follows_quantity() {
        let blocks = invoice(2).to_blocks();
        let table = blocks
            .iter()
            .find_map(|block| match block {
                ContentBlock::Table(table) => Some(table),
                _ => None,
            })
            .expect("line-item table");
        let footer = table.footer.as_ref().expect("total row");
        assert_eq!(footer.last().map(String::as_str), Some("100.00"));

        let blocks = invoice(3).to_blocks();
        let table = blocks
            .iter()
            .find_map(|block| match block {
                ContentBlock::Table(table) => Some(table),
                _ => None,
            })
            .expect("line-item table");
        let footer = table.footer.as_ref().expect("total row");
        assert_eq!(footer.last().map(String::as_str), Some("150.00"));
    }

    #[test]
    fn layout_shape_is_independent_of_quantity() {
        let two = invoice(2).to_blocks();
        let three = invoice(3).to_blocks();
        assert_eq!(two.len(), three.len());
        for (a, b) in two.iter().zip(&three) {
            assert_eq!(a.kind(), b.kind());
        }
    }

    #[test]
    fn notes_become_a_trailing_section() {
        let mut with_notes = invoice(1);
        with_notes.notes = Some("Payable within 14 days.".to_string());
        let blocks = with_notes.to_blocks();
        assert_eq!(blocks.last().map(ContentBlock::kind), Some("section"));
    }

    #[test]
    fn filename_uses_the_invoice_number() {
        assert_eq!(invoice(1).filename(), "Invoice-INV-2031.pdf");
    }

    #[test]
    fn header_carries_both_dates() {
        let blocks = invoice(1).to_blocks();
        let header = match &blocks[0] {
            ContentBlock::Header(header) => header,
            other => panic!("expected header, got {}", other.kind()),
        };
        assert_eq!(header.title, "Invoice INV-2031");
        assert_eq!(
            header.meta_lines,
            vec!["Date: 2026-03-01", "Due: 2026-03-15"]
        );
    }
}
