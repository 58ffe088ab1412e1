//! Shared in-memory state backing every desk operation

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Shared handle to the desk state.
///
/// Each service holds a clone of this handle, the desk being strictly
/// single-actor and synchronous. A variant with concurrent callers would
/// have to guard the state with a lock instead.
pub type StateHandle = Rc<RefCell<LibraryState>>;

/// The four collections of the circulation desk.
///
/// Titles and names are exact-match, case-sensitive strings. Duplicates are
/// legal in `books` and `members` and indistinguishable once inserted. Both
/// maps iterate in insertion order, which is the order listings report.
#[derive(Debug, Default)]
pub struct LibraryState {
    /// Catalog titles, in insertion order.
    pub(crate) books: Vec<String>,
    /// Member names, in insertion order.
    pub(crate) members: Vec<String>,
    /// Active loans: title -> borrower. A title can appear at most once.
    pub(crate) loans: IndexMap<String, String>,
    /// Outstanding fines: name -> balance, present only while unpaid.
    pub(crate) fines: IndexMap<String, Decimal>,
}

impl LibraryState {
    /// Create an empty state behind a shared handle.
    pub fn handle() -> StateHandle {
        Rc::new(RefCell::new(Self::default()))
    }

    pub(crate) fn has_book(&self, title: &str) -> bool {
        self.books.iter().any(|t| t == title)
    }

    pub(crate) fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|n| n == name)
    }

    /// Remove the first catalog entry matching `title`. Duplicate titles
    /// are separate entries, so only one goes per call.
    pub(crate) fn remove_first_book(&mut self, title: &str) -> bool {
        match self.books.iter().position(|t| t == title) {
            Some(idx) => {
                self.books.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the first roster entry matching `name`.
    pub(crate) fn remove_first_member(&mut self, name: &str) -> bool {
        match self.members.iter().position(|n| n == name) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Titles currently on loan to `name`, in loan insertion order.
    pub(crate) fn titles_borrowed_by(&self, name: &str) -> Vec<String> {
        self.loans
            .iter()
            .filter(|(_, borrower)| borrower.as_str() == name)
            .map(|(title, _)| title.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first_book_takes_one_duplicate_at_a_time() {
        let mut state = LibraryState::default();
        state.books.push("Dune".to_string());
        state.books.push("Dune".to_string());

        assert!(state.remove_first_book("Dune"));
        assert_eq!(state.books, vec!["Dune"]);
        assert!(state.remove_first_book("Dune"));
        assert!(state.books.is_empty());
        assert!(!state.remove_first_book("Dune"));
    }

    #[test]
    fn titles_borrowed_by_keeps_loan_insertion_order() {
        let mut state = LibraryState::default();
        state.loans.insert("Dune".to_string(), "Bob".to_string());
        state.loans.insert("Foundation".to_string(), "Alice".to_string());
        state.loans.insert("Hyperion".to_string(), "Bob".to_string());

        assert_eq!(state.titles_borrowed_by("Bob"), vec!["Dune", "Hyperion"]);
        assert!(state.titles_borrowed_by("Carol").is_empty());
    }
}
