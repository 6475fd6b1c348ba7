//! Wire types shared with the remote expense service.
//!
//! Everything in this crate mirrors the JSON the service actually speaks.
//! In particular the storage layer names its identifier `_id`; that field
//! name must never leak past [`expense::RawExpense`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of expense categories understood by the service.
///
/// The wire format is the capitalized label (`"Food"`, `"Bills"`, ...),
/// which matches the variant names, so no serde renaming is needed. A
/// record carrying any other label fails deserialization and is rejected
/// before it can reach the client's collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Health,
    Bills,
    Other,
}

impl Category {
    /// All categories, in the order the entry form offers them.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Health,
        Category::Bills,
        Category::Other,
    ];

    /// Canonical label, identical to the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod expense {
    use super::*;

    /// An expense record exactly as the service returns it.
    ///
    /// `amount` is a JSON number in major units (e.g. `3.5`); the client
    /// converts it to cents at ingestion. Extra fields the storage layer
    /// adds (version counters and the like) are ignored.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct RawExpense {
        /// Storage-assigned identifier.
        #[serde(rename = "_id")]
        pub storage_id: String,
        pub name: String,
        pub amount: f64,
        pub category: Category,
        /// Creation timestamp, RFC3339.
        pub date: DateTime<Utc>,
    }

    /// Request body for creating or updating an expense.
    ///
    /// The service uses the same shape for `POST /expenses` and
    /// `PUT /expenses/{id}`; the identifier travels in the path.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseUpsert {
        pub name: String,
        pub amount: f64,
        pub category: Category,
    }
}
