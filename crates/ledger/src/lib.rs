//! Client-side state layer for the expense tracker.
//!
//! The remote service owns all durable state; this crate keeps the
//! session's in-memory view of it consistent. Records enter through the
//! HTTP [`Client`] (which normalizes the wire shape), live in the
//! [`ExpenseStore`], and are merged back in by [`reconcile`] after each
//! create-or-update round trip. [`CategoryFilter`] and
//! [`ExpenseStore::total`] are pure derivations the UI recomputes on
//! every frame.

pub use api_types::Category;

pub use client::{Client, ClientError};
pub use draft::{ExpenseDraft, ValidatedExpense};
pub use error::LedgerError;
pub use expense::Expense;
pub use filter::CategoryFilter;
pub use money::Amount;
pub use pending::PendingOps;
pub use reconcile::{Submission, reconcile};
pub use store::ExpenseStore;

mod client;
mod draft;
mod error;
mod expense;
mod filter;
mod money;
mod pending;
mod reconcile;
mod store;
