//! Member roster service

use crate::{
    error::{DeskError, DeskResult},
    models::member::{MemberRow, MemberSummary},
    state::StateHandle,
};

#[derive(Clone)]
pub struct MembersService {
    state: StateHandle,
}

impl MembersService {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// Register a member. Duplicate names are permitted.
    pub fn add_member(&self, name: &str) -> DeskResult<()> {
        if name.trim().is_empty() {
            return Err(DeskError::Validation("Member name cannot be blank".to_string()));
        }
        self.state.borrow_mut().members.push(name.to_string());
        tracing::info!("Roster: added member '{}'", name);
        Ok(())
    }

    /// Remove the first roster entry matching `name`.
    ///
    /// The member's fine entry goes with them, and every loan they hold is
    /// cleared; the books become available again but stay in the catalog.
    pub fn remove_member(&self, name: &str) -> DeskResult<()> {
        if name.trim().is_empty() {
            return Err(DeskError::Validation("Member name cannot be blank".to_string()));
        }
        let mut state = self.state.borrow_mut();
        if !state.remove_first_member(name) {
            return Err(DeskError::NotFound("Member not found!".to_string()));
        }
        state.fines.shift_remove(name);
        state.loans.retain(|_, borrower| borrower != name);
        tracing::info!("Roster: removed member '{}'", name);
        Ok(())
    }

    /// Every roster row in insertion order, with the outstanding fine where
    /// one exists.
    pub fn list_members(&self) -> Vec<MemberRow> {
        let state = self.state.borrow();
        state
            .members
            .iter()
            .map(|name| MemberRow {
                name: name.clone(),
                fine: state.fines.get(name).copied(),
            })
            .collect()
    }

    /// Account summary for `name`: outstanding fine and borrowed titles.
    ///
    /// Deliberately lenient: no existence check is performed, so an unknown
    /// or blank name yields an empty summary rather than an error.
    pub fn member_summary(&self, name: &str) -> MemberSummary {
        let state = self.state.borrow();
        MemberSummary {
            fine: state.fines.get(name).copied(),
            borrowed: state.titles_borrowed_by(name),
        }
    }
}
