//! Fine payment outcomes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a fine payment.
///
/// `NoFine` is informational, not an error: paying with no outstanding fine
/// is a legal request that simply has nothing to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOutcome {
    /// The member has no fine entry.
    NoFine,
    /// The payment covered the whole balance; the fine entry is gone.
    PaidInFull,
    /// The payment covered part of the balance.
    Partial { remaining: Decimal },
}
