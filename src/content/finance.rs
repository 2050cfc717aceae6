//! Financial transaction report export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use folio_blocks::{ContentBlock, HeaderBlock, InfoGridBlock, TableBlock, TableColumn};

use super::money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// One ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub occurred_on: NaiveDate,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    /// Magnitude of the transaction; the sign comes from `kind`.
    pub amount: f64,
    pub status: TransactionStatus,
}

impl Transaction {
    /// The amount signed by transaction type.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A financial transaction report over one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub generated_on: NaiveDate,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl FinancialReport {
    pub fn new(generated_on: NaiveDate, transactions: Vec<Transaction>) -> Self {
        Self {
            generated_on,
            transactions,
        }
    }

    /// Sum of income amounts.
    pub fn revenue(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of expense amounts.
    pub fn expenses(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum()
    }

    pub fn profit(&self) -> f64 {
        self.revenue() - self.expenses()
    }

    /// Profit as a percentage of revenue; zero when there is no revenue.
    pub fn margin_percent(&self) -> f64 {
        let revenue = self.revenue();
        if revenue == 0.0 {
            return 0.0;
        }
        self.profit() / revenue * 100.0
    }

    /// Maps the report onto the block model.
    pub fn to_blocks(&self) -> Vec<ContentBlock> {
        let header = HeaderBlock::new("Financial Report").with_meta_line(format!(
            "Generated: {}",
            self.generated_on.format("%Y-%m-%d")
        ));

        let summary = InfoGridBlock::new()
            .with_caption("Summary")
            .entry("Revenue", money(self.revenue()))
            .entry("Expenses", money(self.expenses()))
            .entry("Profit", money(self.profit()))
            .entry("Margin", format!("{:.1}%", self.margin_percent()));

        let mut table = TableBlock::new(vec![
            TableColumn::new("Date", 0.13),
            TableColumn::new("Type", 0.1),
            TableColumn::new("Category", 0.15),
            TableColumn::new("Description", 0.34),
            TableColumn::new("Amount", 0.14).right_aligned(),
            TableColumn::new("Status", 0.14),
        ]);
        for transaction in &self.transactions {
            table = table.row([
                transaction.occurred_on.format("%Y-%m-%d").to_string(),
                transaction.kind.as_str().to_string(),
                transaction.category.clone(),
                transaction.description.clone(),
                money(transaction.signed_amount()),
                transaction.status.as_str().to_string(),
            ]);
        }

        let blocks = vec![
            ContentBlock::Header(header),
            ContentBlock::InfoGrid(summary),
            ContentBlock::Table(table),
        ];
        log::debug!(
            "report of {} transactions mapped to {} blocks",
            self.transactions.len(),
            blocks.len()
        );
        blocks
    }

    /// `financial-transactions-{iso-date}.pdf`
    pub fn filename(&self) -> String {
        format!(
            "financial-transactions-{}.pdf",
            self.generated_on.format("%Y-%m-%d")
        )
    }
}
