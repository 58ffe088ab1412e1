//! Book display rows and loan status

use serde::{Deserialize, Serialize};

/// Whether a catalog title is currently out on loan.
///
/// The status is not stored anywhere; it is derived from the loan ledger at
/// listing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        };
        write!(f, "{}", label)
    }
}

/// One catalog row, as reported by browsing and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRow {
    pub title: String,
    pub status: BookStatus,
}
