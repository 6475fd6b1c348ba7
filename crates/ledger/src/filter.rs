use api_types::Category;

use crate::Expense;

/// Category selection for the list view.
///
/// [`CategoryFilter::All`] is the sentinel meaning "no filtering"; it is
/// its own variant rather than a magic string so matches stay exhaustive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` when the record belongs to the current selection.
    #[must_use]
    pub fn matches(self, record: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == category,
        }
    }

    /// Label shown in the list header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}
