//! Data models for the circulation desk

pub mod book;
pub mod fine;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::{BookRow, BookStatus};
pub use fine::PaymentOutcome;
pub use loan::LoanRow;
pub use member::{MemberRow, MemberSummary};
