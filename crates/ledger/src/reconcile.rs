use crate::{Expense, ExpenseStore, LedgerError};

/// Whether a submission edits an existing record or creates a new one.
///
/// The flag is fixed at the moment the entry form opens (empty form =
/// `Create`, opened over an existing record = `Edit`) and travels with
/// the submission unchanged. Network timing never reclassifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Create,
    Edit,
}

/// Merges a successful create-or-update response into the store.
///
/// The record has already been normalized, so it carries the
/// service-assigned identifier. `Create` appends it; `Edit` replaces the
/// existing record wholesale.
///
/// An `Edit` whose identifier is no longer in the collection means the
/// client and server have diverged (the record was deleted underneath
/// the edit). The response is discarded, never reinserted; the error is
/// distinct from a network failure because a retry will not fix it — a
/// full reload will.
pub fn reconcile(
    store: &mut ExpenseStore,
    record: Expense,
    submission: Submission,
) -> Result<(), LedgerError> {
    match submission {
        Submission::Create => store.insert(record),
        Submission::Edit => store.replace(record),
    }
}

#[cfg(test)]
mod tests {
    use api_types::Category;
    use chrono::Utc;

    use super::*;
    use crate::Amount;

    fn expense(id: &str, name: &str, cents: i64) -> Expense {
        Expense {
            id: id.to_string(),
            name: name.to_string(),
            amount: Amount::new(cents),
            category: Category::Food,
            date: Utc::now(),
        }
    }

    #[test]
    fn create_appends_the_new_record() {
        let mut store = ExpenseStore::new();
        store.load(vec![expense("1", "Lunch", 900)]);

        reconcile(&mut store, expense("2", "Coffee", 350), Submission::Create).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("2").unwrap().amount, Amount::new(350));
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut store = ExpenseStore::new();
        store.load(vec![expense("42", "Dinner", 1800)]);

        reconcile(&mut store, expense("42", "Dinner", 2000), Submission::Edit).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("42").unwrap().amount, Amount::new(2000));
    }

    #[test]
    fn edit_for_a_missing_record_is_discarded() {
        let mut store = ExpenseStore::new();
        store.load(vec![expense("1", "Lunch", 900)]);

        let err = reconcile(&mut store, expense("42", "Ghost", 100), Submission::Edit)
            .unwrap_err();

        assert_eq!(err, LedgerError::UnknownId("42".to_string()));
        assert_eq!(store.len(), 1);
        assert!(!store.contains("42"));
    }

    #[test]
    fn create_with_a_known_id_is_a_logic_error() {
        let mut store = ExpenseStore::new();
        store.load(vec![expense("1", "Lunch", 900)]);

        let err = reconcile(&mut store, expense("1", "Lunch", 900), Submission::Create)
            .unwrap_err();

        assert_eq!(err, LedgerError::DuplicateId("1".to_string()));
        assert_eq!(store.len(), 1);
    }
}
