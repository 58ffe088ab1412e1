//! Loan display row

use serde::{Deserialize, Serialize};

/// One ledger row: a borrowed title and its borrower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRow {
    pub title: String,
    pub borrower: String,
}
