//! Date-driven derivations: day counts, status classification, list ordering.
//!
//! Everything here is pure over (records, `today`) and recomputed on read;
//! status labels are never stored on the records themselves.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::domain::{CreditCardOffer, Expense, PaymentReminder, RecurringPayment};

/// Signed count of calendar days from `today` to `target`. Today is 0,
/// tomorrow is 1, yesterday is -1.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Render-time label for an offer's expiration countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationStatus {
    Expired,
    ExpiringSoon,
    ExpiringMonth,
    Active,
}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpirationStatus::Expired => "expired",
            ExpirationStatus::ExpiringSoon => "expiring-soon",
            ExpirationStatus::ExpiringMonth => "expiring-month",
            ExpirationStatus::Active => "active",
        };
        f.write_str(label)
    }
}

/// Classifies an offer's expiration date. The seven-day boundary is inclusive
/// of `ExpiringSoon`; a date on or before `today` reads as expired.
pub fn expiration_status(expiration_date: NaiveDate, today: NaiveDate) -> ExpirationStatus {
    let days = days_until(today, expiration_date);
    if days <= 0 {
        ExpirationStatus::Expired
    } else if days <= 7 {
        ExpirationStatus::ExpiringSoon
    } else if days <= 30 {
        ExpirationStatus::ExpiringMonth
    } else {
        ExpirationStatus::Active
    }
}

/// Render-time label for a payment reminder's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    Completed,
    Overdue,
    DueToday,
    DueSoon,
    Upcoming,
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReminderStatus::Completed => "completed",
            ReminderStatus::Overdue => "overdue",
            ReminderStatus::DueToday => "due-today",
            ReminderStatus::DueSoon => "due-soon",
            ReminderStatus::Upcoming => "upcoming",
        };
        f.write_str(label)
    }
}

/// Classifies a reminder's due date. Completed reminders short-circuit to the
/// terminal label regardless of date math.
pub fn reminder_status(reminder: &PaymentReminder, today: NaiveDate) -> ReminderStatus {
    if reminder.completed {
        return ReminderStatus::Completed;
    }
    match days_until(today, reminder.due_date) {
        days if days < 0 => ReminderStatus::Overdue,
        0 => ReminderStatus::DueToday,
        1..=3 => ReminderStatus::DueSoon,
        _ => ReminderStatus::Upcoming,
    }
}

/// Render-time label for a recurring payment's next due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Inactive,
    Overdue,
    DueToday,
    DueSoon,
    Upcoming,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Inactive => "inactive",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::DueToday => "due-today",
            PaymentStatus::DueSoon => "due-soon",
            PaymentStatus::Upcoming => "upcoming",
        };
        f.write_str(label)
    }
}

/// Classifies a recurring payment's next-payment date. Inactive payments
/// short-circuit to the terminal label.
pub fn payment_status(payment: &RecurringPayment, today: NaiveDate) -> PaymentStatus {
    if !payment.is_active {
        return PaymentStatus::Inactive;
    }
    match days_until(today, payment.next_payment) {
        days if days < 0 => PaymentStatus::Overdue,
        0 => PaymentStatus::DueToday,
        1..=7 => PaymentStatus::DueSoon,
        _ => PaymentStatus::Upcoming,
    }
}

/// Expenses in display order: most recent date first.
pub fn sorted_expenses(expenses: &[Expense]) -> Vec<&Expense> {
    let mut out: Vec<&Expense> = expenses.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Recurring payments in display order: soonest next payment first.
pub fn sorted_recurring_payments(payments: &[RecurringPayment]) -> Vec<&RecurringPayment> {
    let mut out: Vec<&RecurringPayment> = payments.iter().collect();
    out.sort_by(|a, b| a.next_payment.cmp(&b.next_payment));
    out
}

/// Offers in display order: active-status records first, then ascending by
/// expiration date. The sort is stable, so equal keys keep insertion order.
pub fn sorted_offers(offers: &[CreditCardOffer]) -> Vec<&CreditCardOffer> {
    use crate::domain::OfferStatus;
    let mut out: Vec<&CreditCardOffer> = offers.iter().collect();
    out.sort_by(|a, b| {
        let a_active = a.status == OfferStatus::Active;
        let b_active = b.status == OfferStatus::Active;
        b_active
            .cmp(&a_active)
            .then(a.expiration_date.cmp(&b.expiration_date))
    });
    out
}

/// Reminders in display order: incomplete before completed; among incomplete,
/// overdue before non-overdue, then ascending due date; among completed,
/// most recently completed first.
pub fn sorted_reminders(reminders: &[PaymentReminder], today: NaiveDate) -> Vec<&PaymentReminder> {
    let mut out: Vec<&PaymentReminder> = reminders.iter().collect();
    out.sort_by(|a, b| match (a.completed, b.completed) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => b.completed_at.cmp(&a.completed_at),
        (false, false) => {
            let a_overdue = days_until(today, a.due_date) < 0;
            let b_overdue = days_until(today, b.due_date) < 0;
            b_overdue
                .cmp(&a_overdue)
                .then(a.due_date.cmp(&b.due_date))
        }
    });
    out
}
