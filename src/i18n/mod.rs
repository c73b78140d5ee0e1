//! Localized strings for terminal output
//!
//! Covers the interface labels, category names and month names in the three
//! supported languages. Stored data never contains localized text; only
//! rendering goes through this module.

use crate::models::Language;

/// Interface labels for one language
#[derive(Debug)]
pub struct Labels {
    pub balance: &'static str,
    pub income: &'static str,
    pub expense: &'static str,
    pub expenses: &'static str,
    pub this_month: &'static str,
    pub recent_transactions: &'static str,
    pub no_transactions: &'static str,
    pub transactions: &'static str,
    pub goals: &'static str,
    pub no_goals: &'static str,
    pub debts: &'static str,
    pub no_debts: &'static str,
    pub total: &'static str,
    pub paid: &'static str,
    pub remaining: &'static str,
    pub completed: &'static str,
    pub overdue: &'static str,
    pub deadline: &'static str,
    pub due: &'static str,
    pub creditor: &'static str,
    pub categories: &'static str,
    pub utilities: &'static str,
    pub no_utilities: &'static str,
    pub monthly_report: &'static str,
    pub saved: &'static str,
    pub deleted: &'static str,
    pub cleared: &'static str,
    pub generic_error: &'static str,
}

const AZ: Labels = Labels {
    balance: "Balans",
    income: "Gəlir",
    expense: "Xərc",
    expenses: "Xərclər",
    this_month: "Bu ay",
    recent_transactions: "Son əməliyyatlar",
    no_transactions: "Hələ əməliyyat yoxdur",
    transactions: "Əməliyyatlar",
    goals: "Məqsədlər",
    no_goals: "Hələ məqsəd yoxdur",
    debts: "Borclar",
    no_debts: "Hələ borc yoxdur",
    total: "Cəmi",
    paid: "Ödənilib",
    remaining: "Qalıq",
    completed: "Tamamlandı",
    overdue: "Gecikib",
    deadline: "Son tarix",
    due: "Ödəniş tarixi",
    creditor: "Kreditor",
    categories: "Kateqoriyalar",
    utilities: "Komunal xərclər",
    no_utilities: "Komunal xərc yoxdur",
    monthly_report: "Aylıq hesabat",
    saved: "Yadda saxlanıldı",
    deleted: "Silindi",
    cleared: "Bütün məlumatlar silindi",
    generic_error: "Xəta baş verdi",
};

const RU: Labels = Labels {
    balance: "Баланс",
    income: "Доход",
    expense: "Расход",
    expenses: "Расходы",
    this_month: "Этот месяц",
    recent_transactions: "Последние операции",
    no_transactions: "Операций пока нет",
    transactions: "Операции",
    goals: "Цели",
    no_goals: "Целей пока нет",
    debts: "Долги",
    no_debts: "Долгов пока нет",
    total: "Итого",
    paid: "Оплачено",
    remaining: "Осталось",
    completed: "Выполнено",
    overdue: "Просрочено",
    deadline: "Срок",
    due: "Дата платежа",
    creditor: "Кредитор",
    categories: "Категории",
    utilities: "Коммунальные расходы",
    no_utilities: "Коммунальных расходов нет",
    monthly_report: "Месячный отчёт",
    saved: "Сохранено",
    deleted: "Удалено",
    cleared: "Все данные удалены",
    generic_error: "Произошла ошибка",
};

const EN: Labels = Labels {
    balance: "Balance",
    income: "Income",
    expense: "Expense",
    expenses: "Expenses",
    this_month: "This month",
    recent_transactions: "Recent transactions",
    no_transactions: "No transactions yet",
    transactions: "Transactions",
    goals: "Goals",
    no_goals: "No goals yet",
    debts: "Debts",
    no_debts: "No debts yet",
    total: "Total",
    paid: "Paid",
    remaining: "Remaining",
    completed: "Completed",
    overdue: "Overdue",
    deadline: "Deadline",
    due: "Due",
    creditor: "Creditor",
    categories: "Categories",
    utilities: "Utility bills",
    no_utilities: "No utility bills",
    monthly_report: "Monthly report",
    saved: "Saved",
    deleted: "Deleted",
    cleared: "All data cleared",
    generic_error: "Something went wrong",
};

/// Labels for a language
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Az => &AZ,
        Language::Ru => &RU,
        Language::En => &EN,
    }
}

/// Localized name of a catalog category ID
pub fn category_name(id: &str, language: Language) -> Option<&'static str> {
    use Language::{Az, En, Ru};

    let name = match (id, language) {
        ("food", Az) => "Yemək",
        ("food", Ru) => "Еда",
        ("food", En) => "Food",
        ("transport", Az) => "Nəqliyyat",
        ("transport", Ru) => "Транспорт",
        ("transport", En) => "Transport",
        ("shopping", Az) => "Alış-veriş",
        ("shopping", Ru) => "Покупки",
        ("shopping", En) => "Shopping",
        ("utilities", Az) => "Komunal",
        ("utilities", Ru) => "Коммунальные",
        ("utilities", En) => "Utilities",
        ("entertainment", Az) => "Əyləncə",
        ("entertainment", Ru) => "Развлечения",
        ("entertainment", En) => "Entertainment",
        ("health", Az) => "Sağlamlıq",
        ("health", Ru) => "Здоровье",
        ("health", En) => "Health",
        ("education", Az) => "Təhsil",
        ("education", Ru) => "Образование",
        ("education", En) => "Education",
        ("clothing", Az) => "Geyim",
        ("clothing", Ru) => "Одежда",
        ("clothing", En) => "Clothing",
        ("salary", Az) => "Maaş",
        ("salary", Ru) => "Зарплата",
        ("salary", En) => "Salary",
        ("freelance", Az | En) => "Freelance",
        ("freelance", Ru) => "Фриланс",
        ("investment", Az) => "İnvestisiya",
        ("investment", Ru) => "Инвестиции",
        ("investment", En) => "Investment",
        ("gift", Az) => "Hədiyyə",
        ("gift", Ru) => "Подарок",
        ("gift", En) => "Gift",
        ("sales", Az) => "Satış",
        ("sales", Ru) => "Продажи",
        ("sales", En) => "Sales",
        ("other", Az) => "Digər",
        ("other", Ru) => "Другое",
        ("other", En) => "Other",
        _ => return None,
    };
    Some(name)
}

const MONTHS_AZ: [&str; 12] = [
    "Yanvar", "Fevral", "Mart", "Aprel", "May", "İyun", "İyul", "Avqust", "Sentyabr", "Oktyabr",
    "Noyabr", "Dekabr",
];

const MONTHS_RU: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month name for a 1-based month number
pub fn month_name(month: u32, language: Language) -> Option<&'static str> {
    let months = match language {
        Language::Az => &MONTHS_AZ,
        Language::Ru => &MONTHS_RU,
        Language::En => &MONTHS_EN,
    };
    months.get(month.checked_sub(1)? as usize).copied()
}

/// "Mart 2025" style heading for a `YYYY-MM` bucket key
///
/// Keys that do not parse are returned unchanged.
pub fn month_label(month_key: &str, language: Language) -> String {
    month_key
        .split_once('-')
        .and_then(|(year, month)| {
            let name = month_name(month.parse().ok()?, language)?;
            Some(format!("{} {}", name, year))
        })
        .unwrap_or_else(|| month_key.to_string())
}

/// Lowercase text for matching user input
///
/// Azerbaijani and Turkish dotted capital `İ` folds to a plain `i` rather
/// than `i` plus a combining dot.
pub fn fold(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c == 'İ' { 'i' } else { c })
        .collect::<String>()
        .to_lowercase()
}
