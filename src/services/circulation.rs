//! Borrow/return service over the loan ledger

use crate::{
    error::{DeskError, DeskResult},
    models::loan::LoanRow,
    state::StateHandle,
};

#[derive(Clone)]
pub struct CirculationService {
    state: StateHandle,
}

impl CirculationService {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// Lend `title` to `member`.
    ///
    /// Checks run in order: blank input, member exists, book exists, book
    /// not already out. A member may hold any number of loans; a title may
    /// be out to at most one borrower.
    pub fn borrow_book(&self, member: &str, title: &str) -> DeskResult<()> {
        if member.trim().is_empty() {
            return Err(DeskError::Validation("Member name cannot be blank".to_string()));
        }
        if title.trim().is_empty() {
            return Err(DeskError::Validation("Book title cannot be blank".to_string()));
        }
        let mut state = self.state.borrow_mut();
        if !state.has_member(member) {
            return Err(DeskError::NotFound("Member not found!".to_string()));
        }
        if !state.has_book(title) {
            return Err(DeskError::NotFound("Book not found!".to_string()));
        }
        if state.loans.contains_key(title) {
            return Err(DeskError::Conflict("Book is already borrowed!".to_string()));
        }
        state.loans.insert(title.to_string(), member.to_string());
        tracing::info!("Circulation: '{}' borrowed by '{}'", title, member);
        Ok(())
    }

    /// Take `title` back, whoever returns it.
    ///
    /// Only the ledger is consulted: a loan entry is returnable even if the
    /// title were somehow gone from the catalog.
    pub fn return_book(&self, title: &str) -> DeskResult<()> {
        if title.trim().is_empty() {
            return Err(DeskError::Validation("Book title cannot be blank".to_string()));
        }
        let mut state = self.state.borrow_mut();
        if state.loans.shift_remove(title).is_none() {
            return Err(DeskError::NotFound(
                "This book wasn't borrowed or doesn't exist!".to_string(),
            ));
        }
        tracing::info!("Circulation: '{}' returned", title);
        Ok(())
    }

    /// Every active loan in insertion order.
    pub fn list_loans(&self) -> Vec<LoanRow> {
        self.state
            .borrow()
            .loans
            .iter()
            .map(|(title, borrower)| LoanRow {
                title: title.clone(),
                borrower: borrower.clone(),
            })
            .collect()
    }
}
