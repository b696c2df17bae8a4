//! Dashboard aggregates derived from the current collections and `today`.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    CreditCardOffer, Expense, ExpenseCategory, Frequency, PaymentReminder, RecurringPayment,
};
use crate::schedule::days_until;

/// Weeks per month used for the weekly-to-monthly rollup.
const WEEKS_PER_MONTH: f64 = 4.33;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// Totals for expenses dated in the current calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub total: f64,
    pub expense_count: usize,
    /// Per-category sums, descending by amount.
    pub by_category: Vec<CategoryTotal>,
}

/// Sums expenses whose date falls in `today`'s calendar month and year, with
/// a per-category breakdown ordered by descending spend.
pub fn monthly_expense_summary(expenses: &[Expense], today: NaiveDate) -> MonthlySummary {
    let in_month = |date: NaiveDate| date.month() == today.month() && date.year() == today.year();

    let mut total = 0.0;
    let mut expense_count = 0;
    let mut buckets: HashMap<ExpenseCategory, f64> = HashMap::new();
    for expense in expenses.iter().filter(|e| in_month(e.date)) {
        total += expense.amount;
        expense_count += 1;
        *buckets.entry(expense.category).or_insert(0.0) += expense.amount;
    }

    let mut by_category: Vec<CategoryTotal> = buckets
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    by_category.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });

    MonthlySummary {
        total,
        expense_count,
        by_category,
    }
}

/// Monthly-equivalent total across recurring payments. Monthly amounts count
/// as-is, weekly amounts scale by 4.33, yearly amounts divide by 12.
/// Bi-weekly and quarterly cadences contribute nothing; no conversion factor
/// is defined for them.
pub fn monthly_recurring_total(payments: &[RecurringPayment]) -> f64 {
    payments
        .iter()
        .map(|payment| match payment.frequency {
            Frequency::Monthly => payment.amount,
            Frequency::Weekly => payment.amount * WEEKS_PER_MONTH,
            Frequency::Yearly => payment.amount / 12.0,
            Frequency::BiWeekly | Frequency::Quarterly => 0.0,
        })
        .sum()
}

/// Recurring payments due within the next seven days, today included.
pub fn upcoming_recurring_payments<'a>(
    payments: &'a [RecurringPayment],
    today: NaiveDate,
) -> Vec<&'a RecurringPayment> {
    payments
        .iter()
        .filter(|payment| {
            let days = days_until(today, payment.next_payment);
            (0..=7).contains(&days)
        })
        .collect()
}

/// Incomplete reminders whose due date has passed.
pub fn overdue_reminders<'a>(
    reminders: &'a [PaymentReminder],
    today: NaiveDate,
) -> Vec<&'a PaymentReminder> {
    reminders
        .iter()
        .filter(|reminder| !reminder.completed && days_until(today, reminder.due_date) < 0)
        .collect()
}

/// Incomplete reminders due exactly today.
pub fn due_today_reminders<'a>(
    reminders: &'a [PaymentReminder],
    today: NaiveDate,
) -> Vec<&'a PaymentReminder> {
    reminders
        .iter()
        .filter(|reminder| !reminder.completed && days_until(today, reminder.due_date) == 0)
        .collect()
}

/// Count of offers whose expiration date is still in the future.
pub fn active_offer_count(offers: &[CreditCardOffer], today: NaiveDate) -> usize {
    offers
        .iter()
        .filter(|offer| offer.expiration_date > today)
        .count()
}
