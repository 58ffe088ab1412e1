//! Circdesk - Library Circulation Desk
//!
//! An in-memory implementation of a library circulation desk: a catalog of
//! book titles, a member roster, a loan ledger, and a fine ledger, exposed
//! through a small set of validated operations. All state lives for the
//! lifetime of the process; there is no persistence and no network.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod state;

pub use config::AppConfig;
pub use error::{DeskError, DeskResult};
pub use services::Desk;
