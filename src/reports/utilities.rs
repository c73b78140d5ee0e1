//! Utility bills report
//!
//! Picks out utility expenses (electricity, water, gas, internet, phone,
//! building fees) and groups them by month, newest month first.

use std::collections::BTreeMap;

use crate::i18n;
use crate::models::category::{category_by_id, UTILITIES};
use crate::models::{Currency, Language, Money, Transaction};

/// Kind of utility bill, derived from the description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UtilityKind {
    Electricity,
    Water,
    Gas,
    Internet,
    Phone,
    Building,
}

impl UtilityKind {
    pub fn all() -> &'static [UtilityKind] {
        &[
            Self::Electricity,
            Self::Water,
            Self::Gas,
            Self::Internet,
            Self::Phone,
            Self::Building,
        ]
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Electricity => &["işıq", "elektrik", "electricity"],
            Self::Water => &["su", "water"],
            Self::Gas => &["qaz", "gas"],
            Self::Internet => &["internet", "wifi"],
            Self::Phone => &["telefon", "phone"],
            Self::Building => &["bina", "aidat", "building"],
        }
    }

    /// Classify a bill by its description; unmatched bills count as electricity
    pub fn classify(description: &str) -> Self {
        let words = words(description);
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.keywords().iter().any(|k| mentions(&words, k)))
            .unwrap_or(Self::Electricity)
    }

    pub fn name(&self, language: Language) -> &'static str {
        use Language::{Az, En, Ru};

        match (self, language) {
            (Self::Electricity, Az) => "İşıq",
            (Self::Electricity, Ru) => "Электричество",
            (Self::Electricity, En) => "Electricity",
            (Self::Water, Az) => "Su",
            (Self::Water, Ru) => "Вода",
            (Self::Water, En) => "Water",
            (Self::Gas, Az) => "Qaz",
            (Self::Gas, Ru) => "Газ",
            (Self::Gas, En) => "Gas",
            (Self::Internet, Az) => "İnternet",
            (Self::Internet, Ru) => "Интернет",
            (Self::Internet, En) => "Internet",
            (Self::Phone, Az) => "Telefon",
            (Self::Phone, Ru) => "Телефон",
            (Self::Phone, En) => "Phone",
            (Self::Building, Az) => "Bina aidatı",
            (Self::Building, Ru) => "Обслуживание дома",
            (Self::Building, En) => "Building fee",
        }
    }
}

/// Words that mark a description as a utility bill
const DETECTION_KEYWORDS: [&str; 7] = ["komunal", "işıq", "su", "qaz", "internet", "telefon", "bina"];

fn words(text: &str) -> Vec<String> {
    i18n::fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// A keyword counts when some word starts with it ("suyun" mentions "su")
fn mentions(words: &[String], keyword: &str) -> bool {
    words.iter().any(|w| w.starts_with(keyword))
}

/// Whether a transaction is a utility bill
///
/// Expenses in the utilities category always are; other expenses are
/// recognized by keywords in the description.
pub fn is_utility(txn: &Transaction) -> bool {
    if !txn.is_expense() {
        return false;
    }
    if category_by_id(&txn.category).is_some_and(|c| c.id == UTILITIES) {
        return true;
    }
    let words = words(&txn.description);
    DETECTION_KEYWORDS.iter().any(|k| mentions(&words, k))
}

/// Utility bills of one month
#[derive(Debug, Clone)]
pub struct UtilityMonth {
    /// `YYYY-MM`
    pub month_key: String,
    pub bills: Vec<Transaction>,
    pub total: Money,
    /// Totals per kind, only kinds with bills, in `UtilityKind::all` order
    pub by_kind: Vec<(UtilityKind, Money)>,
}

/// Utility bills grouped by month
#[derive(Debug, Clone, Default)]
pub struct UtilitiesReport {
    /// Newest month first
    pub months: Vec<UtilityMonth>,
}

impl UtilitiesReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut grouped: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
        for txn in transactions.iter().filter(|t| is_utility(t)) {
            grouped.entry(txn.month_key()).or_default().push(txn.clone());
        }

        let months = grouped
            .into_iter()
            .rev()
            .map(|(month_key, bills)| {
                let total = bills.iter().map(|b| b.amount).sum();

                let mut kind_totals: BTreeMap<UtilityKind, Money> = BTreeMap::new();
                for bill in &bills {
                    *kind_totals
                        .entry(UtilityKind::classify(&bill.description))
                        .or_default() += bill.amount;
                }

                UtilityMonth {
                    month_key,
                    bills,
                    total,
                    by_kind: kind_totals.into_iter().collect(),
                }
            })
            .collect();

        Self { months }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Bills for one `YYYY-MM` month
    pub fn month(&self, month_key: &str) -> Option<&UtilityMonth> {
        self.months.iter().find(|m| m.month_key == month_key)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, language: Language, currency: Currency) -> String {
        let labels = i18n::labels(language);
        let symbol = currency.symbol();

        let mut output = format!("{}\n", labels.utilities);
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str(labels.no_utilities);
            output.push('\n');
            return output;
        }

        for month in &self.months {
            output.push_str(&format!(
                "\n{:<30} {:>16}\n",
                i18n::month_label(&month.month_key, language),
                month.total.format_with_symbol(symbol)
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');

            for (kind, total) in &month.by_kind {
                output.push_str(&format!(
                    "  {:<28} {:>16}\n",
                    kind.name(language),
                    total.format_with_symbol(symbol)
                ));
            }

            for bill in &month.bills {
                output.push_str(&format!(
                    "    {}  {:<30} {:>14}\n",
                    bill.date.format("%d.%m.%Y"),
                    bill.description,
                    (-bill.amount).format_with_symbol(symbol)
                ));
            }
        }

        output
    }
}
