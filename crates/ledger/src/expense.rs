use api_types::Category;
use api_types::expense::RawExpense;
use chrono::{DateTime, Utc};

use crate::Amount;

/// A single categorized expense as the client holds it.
///
/// Records only ever come into existence through [`Expense::from_raw`],
/// i.e. after the remote service has accepted them and assigned an
/// identifier; the client never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Canonical identifier, set from the storage-assigned id at
    /// ingestion. Unique within the collection.
    pub id: String,
    pub name: String,
    pub amount: Amount,
    pub category: Category,
    /// Creation timestamp. Display only; the store never sorts by it.
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Normalizes a raw service record into the client shape.
    ///
    /// The storage identifier becomes [`Expense::id`] and the major-unit
    /// amount becomes integer cents; every other field is copied
    /// unchanged. This is the only point where the storage field name
    /// crosses into the client, and it is applied to every record the
    /// service returns, whether from a list, a create, or an update.
    #[must_use]
    pub fn from_raw(raw: RawExpense) -> Self {
        Self {
            id: raw.storage_id,
            name: raw.name,
            amount: Amount::from_major(raw.amount),
            category: raw.category,
            date: raw.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_maps_the_storage_id() {
        let raw: RawExpense = serde_json::from_str(
            r#"{
                "_id": "673f2a1c9d4e5b0012345678",
                "name": "Coffee",
                "amount": 3.5,
                "category": "Food",
                "date": "2025-01-15T09:30:00Z",
                "__v": 0
            }"#,
        )
        .unwrap();

        let expense = Expense::from_raw(raw);
        assert_eq!(expense.id, "673f2a1c9d4e5b0012345678");
        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.amount, Amount::new(350));
        assert_eq!(expense.category, Category::Food);
    }
}
