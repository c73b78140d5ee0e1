//! Built-in category catalog
//!
//! Categories are fixed per transaction type. Each has a stable English ID
//! that is persisted on transactions, the legacy ID used by older data files,
//! and localized display names (see `i18n`).

use super::preferences::Language;
use super::transaction::TransactionType;
use crate::i18n;

/// A catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier persisted on transactions
    pub id: &'static str,
    /// Identifier used by older data files
    pub legacy_id: &'static str,
    pub kind: TransactionType,
    /// Icon hint for front ends
    pub icon: &'static str,
}

impl Category {
    const fn expense(id: &'static str, legacy_id: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            legacy_id,
            kind: TransactionType::Expense,
            icon,
        }
    }

    const fn income(id: &'static str, legacy_id: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            legacy_id,
            kind: TransactionType::Income,
            icon,
        }
    }

    /// Localized display name
    pub fn name(&self, language: Language) -> &'static str {
        i18n::category_name(self.id, language).unwrap_or(self.id)
    }

    /// Check whether user input names this category
    ///
    /// Matches the ID, the legacy ID, or the display name in any language,
    /// ignoring case.
    pub fn matches(&self, input: &str) -> bool {
        let input = i18n::fold(input);
        input == self.id
            || input == self.legacy_id
            || Language::all()
                .iter()
                .any(|lang| i18n::fold(self.name(*lang)) == input)
    }
}

/// ID of the utilities expense category
pub const UTILITIES: &str = "utilities";

/// ID shared by the "other" category of both types
pub const OTHER: &str = "other";

const EXPENSE_CATEGORIES: [Category; 9] = [
    Category::expense("food", "yemək", "restaurant"),
    Category::expense("transport", "nəqliyyat", "car"),
    Category::expense("shopping", "alış-veriş", "storefront"),
    Category::expense(UTILITIES, "komunal", "flash"),
    Category::expense("entertainment", "əyləncə", "game-controller"),
    Category::expense("health", "sağlamlıq", "medical"),
    Category::expense("education", "təhsil", "school"),
    Category::expense("clothing", "geyim", "shirt"),
    Category::expense(OTHER, "digər", "ellipsis-horizontal"),
];

const INCOME_CATEGORIES: [Category; 6] = [
    Category::income("salary", "maaş", "briefcase"),
    Category::income("freelance", "freelance", "laptop"),
    Category::income("investment", "investisiya", "trending-up"),
    Category::income("gift", "hədiyyə", "gift"),
    Category::income("sales", "satış", "cash"),
    Category::income(OTHER, "digər", "ellipsis-horizontal"),
];

pub fn expense_categories() -> &'static [Category] {
    &EXPENSE_CATEGORIES
}

pub fn income_categories() -> &'static [Category] {
    &INCOME_CATEGORIES
}

/// All categories available for a transaction type
pub fn categories_for(kind: TransactionType) -> &'static [Category] {
    match kind {
        TransactionType::Income => income_categories(),
        TransactionType::Expense => expense_categories(),
    }
}

/// Resolve user input (ID, legacy ID or localized name) to a category
pub fn find_category(kind: TransactionType, input: &str) -> Option<&'static Category> {
    categories_for(kind).iter().find(|c| c.matches(input))
}

/// Look up a category by its stored ID, across both types
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    expense_categories()
        .iter()
        .chain(income_categories())
        .find(|c| c.id == id || c.legacy_id == id)
}

/// Display name for a stored category ID, falling back to the raw ID
pub fn display_name(id: &str, language: Language) -> String {
    category_by_id(id)
        .map(|c| c.name(language).to_string())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(expense_categories().len(), 9);
        assert_eq!(income_categories().len(), 6);
        assert!(expense_categories()
            .iter()
            .all(|c| c.kind == TransactionType::Expense));
    }

    #[test]
    fn test_find_by_id_and_legacy_id() {
        let food = find_category(TransactionType::Expense, "food").unwrap();
        assert_eq!(food.id, "food");

        let legacy = find_category(TransactionType::Expense, "komunal").unwrap();
        assert_eq!(legacy.id, UTILITIES);

        let salary = find_category(TransactionType::Income, "MAAŞ").unwrap();
        assert_eq!(salary.id, "salary");
    }

    #[test]
    fn test_find_by_localized_name() {
        let found = find_category(TransactionType::Expense, "Transport").unwrap();
        assert_eq!(found.id, "transport");

        let found = find_category(TransactionType::Income, "Зарплата").unwrap();
        assert_eq!(found.id, "salary");
    }

    #[test]
    fn test_category_must_match_type() {
        assert!(find_category(TransactionType::Income, "food").is_none());
        assert!(find_category(TransactionType::Expense, "salary").is_none());
        assert!(find_category(TransactionType::Income, OTHER).is_some());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("food", Language::En), "Food");
        assert_eq!(display_name("yemək", Language::En), "Food");
        assert_eq!(display_name("custom", Language::En), "custom");
    }
}
