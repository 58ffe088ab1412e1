//! Catalog management service

use crate::{
    error::{DeskError, DeskResult},
    models::book::{BookRow, BookStatus},
    state::StateHandle,
};

#[derive(Clone)]
pub struct CatalogService {
    state: StateHandle,
}

impl CatalogService {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// Add a title to the catalog.
    ///
    /// Duplicates are permitted and become separate, indistinguishable
    /// catalog entries.
    pub fn add_book(&self, title: &str) -> DeskResult<()> {
        if title.trim().is_empty() {
            return Err(DeskError::Validation("Book title cannot be blank".to_string()));
        }
        self.state.borrow_mut().books.push(title.to_string());
        tracing::info!("Catalog: added book '{}'", title);
        Ok(())
    }

    /// Remove the first catalog entry matching `title`, together with its
    /// loan entry if the copy was out.
    pub fn remove_book(&self, title: &str) -> DeskResult<()> {
        if title.trim().is_empty() {
            return Err(DeskError::Validation("Book title cannot be blank".to_string()));
        }
        let mut state = self.state.borrow_mut();
        if !state.remove_first_book(title) {
            return Err(DeskError::NotFound("Book not found!".to_string()));
        }
        state.loans.shift_remove(title);
        tracing::info!("Catalog: removed book '{}'", title);
        Ok(())
    }

    /// Every catalog row in insertion order, with loan status derived from
    /// the ledger.
    pub fn list_books(&self) -> Vec<BookRow> {
        let state = self.state.borrow();
        state
            .books
            .iter()
            .map(|title| BookRow {
                title: title.clone(),
                status: if state.loans.contains_key(title) {
                    BookStatus::Borrowed
                } else {
                    BookStatus::Available
                },
            })
            .collect()
    }

    /// Catalog rows whose title contains `query`, case-insensitively, in
    /// insertion order. A blank query matches nothing.
    pub fn search_books(&self, query: &str) -> Vec<BookRow> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.list_books()
            .into_iter()
            .filter(|row| row.title.to_lowercase().contains(&needle))
            .collect()
    }
}
