//! Fine assignment and payment service

use rust_decimal::Decimal;

use crate::{
    error::{DeskError, DeskResult},
    models::fine::PaymentOutcome,
    state::StateHandle,
};

#[derive(Clone)]
pub struct FinesService {
    state: StateHandle,
}

impl FinesService {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// Add `amount_text` to a member's balance, creating the entry if absent.
    ///
    /// The member check runs before the amount parse. No range validation:
    /// zero and negative amounts are accepted as-is.
    pub fn assign_fine(&self, member: &str, amount_text: &str) -> DeskResult<()> {
        let mut state = self.state.borrow_mut();
        if !state.has_member(member) {
            return Err(DeskError::NotFound("Member not found!".to_string()));
        }
        let amount: Decimal = amount_text
            .trim()
            .parse()
            .map_err(|_| DeskError::InvalidAmount("Invalid amount!".to_string()))?;
        *state.fines.entry(member.to_string()).or_insert(Decimal::ZERO) += amount;
        tracing::info!("Fines: assigned {} to '{}'", amount, member);
        Ok(())
    }

    /// Settle some or all of a member's balance.
    ///
    /// A payment covering the whole balance deletes the entry; a smaller one
    /// leaves the remainder on the books. A member with no entry gets the
    /// informational [`PaymentOutcome::NoFine`], never an error.
    pub fn pay_fine(&self, member: &str, payment_text: &str) -> DeskResult<PaymentOutcome> {
        let mut state = self.state.borrow_mut();
        let Some(balance) = state.fines.get(member).copied() else {
            return Ok(PaymentOutcome::NoFine);
        };
        let payment: Decimal = payment_text
            .trim()
            .parse()
            .map_err(|_| DeskError::InvalidAmount("Invalid payment amount!".to_string()))?;
        if payment >= balance {
            state.fines.shift_remove(member);
            tracing::info!("Fines: '{}' paid in full", member);
            Ok(PaymentOutcome::PaidInFull)
        } else {
            let remaining = balance - payment;
            state.fines.insert(member.to_string(), remaining);
            tracing::info!("Fines: '{}' paid {}, {} remaining", member, payment, remaining);
            Ok(PaymentOutcome::Partial { remaining })
        }
    }
}
