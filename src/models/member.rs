//! Member display rows and account summary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One roster row: a member and their outstanding fine, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRow {
    pub name: String,
    /// `None` means no fine entry, which the roster renders as "None".
    pub fine: Option<Decimal>,
}

/// A member's account summary: outstanding fine and borrowed titles.
///
/// Produced for any name, known or not; an unknown name simply yields an
/// empty summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub fine: Option<Decimal>,
    /// Titles on loan to this member, in loan insertion order.
    pub borrowed: Vec<String>,
}
