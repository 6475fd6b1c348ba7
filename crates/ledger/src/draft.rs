use api_types::Category;

use crate::{Amount, Expense, LedgerError};

/// Entry-form state before validation.
///
/// `amount` stays raw text until [`ExpenseDraft::validate`] runs, so the
/// form can hold whatever the user typed without losing it.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub category: Option<Category>,
}

/// A draft that passed validation and is ready to submit.
#[derive(Debug, Clone)]
pub struct ValidatedExpense {
    pub name: String,
    pub amount: Amount,
    pub category: Category,
}

impl ExpenseDraft {
    /// Prefills the form from an existing record (edit mode).
    #[must_use]
    pub fn from_record(record: &Expense) -> Self {
        Self {
            name: record.name.clone(),
            amount: record.amount.to_string(),
            category: Some(record.category),
        }
    }

    /// Validates the draft locally.
    ///
    /// Runs before any network call: a failure here mutates nothing and
    /// reaches no service. Name must be non-empty after trimming, a
    /// category must be selected, and the amount must parse to a strictly
    /// positive value.
    pub fn validate(&self) -> Result<ValidatedExpense, LedgerError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LedgerError::MissingField("name"));
        }

        let Some(category) = self.category else {
            return Err(LedgerError::MissingField("category"));
        };

        let amount: Amount = self.amount.parse()?;
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }

        Ok(ValidatedExpense {
            name: name.to_string(),
            amount,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, amount: &str, category: Option<Category>) -> ExpenseDraft {
        ExpenseDraft {
            name: name.to_string(),
            amount: amount.to_string(),
            category,
        }
    }

    #[test]
    fn valid_draft_passes() {
        let valid = draft("Coffee", "3.50", Some(Category::Food))
            .validate()
            .unwrap();
        assert_eq!(valid.name, "Coffee");
        assert_eq!(valid.amount, Amount::new(350));
        assert_eq!(valid.category, Category::Food);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = draft("   ", "3.50", Some(Category::Food))
            .validate()
            .unwrap_err();
        assert_eq!(err, LedgerError::MissingField("name"));
    }

    #[test]
    fn missing_category_is_rejected() {
        let err = draft("Coffee", "3.50", None).validate().unwrap_err();
        assert_eq!(err, LedgerError::MissingField("category"));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = draft("Coffee", "-5", Some(Category::Food))
            .validate()
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let err = draft("Coffee", "0", Some(Category::Food))
            .validate()
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let err = draft("Coffee", "abc", Some(Category::Food))
            .validate()
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn prefill_round_trips_through_validation() {
        let record = Expense {
            id: "42".to_string(),
            name: "Train".to_string(),
            amount: Amount::new(2000),
            category: Category::Travel,
            date: chrono::Utc::now(),
        };
        let valid = ExpenseDraft::from_record(&record).validate().unwrap();
        assert_eq!(valid.amount, record.amount);
        assert_eq!(valid.category, record.category);
    }
}
