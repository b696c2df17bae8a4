//! Recurring payment model and calendar-aware schedule advancement.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enumerates the payment cadences a recurring payment can follow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Advances `from` by one cadence step. Weekly cadences are fixed day
    /// counts; month and year steps are calendar-aware, clamping to the last
    /// day of shorter target months (Jan 31 + monthly = Feb 29 in leap years).
    pub fn advance(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Weekly => from + Duration::days(7),
            Frequency::BiWeekly => from + Duration::days(14),
            Frequency::Monthly => shift_month(from, 1),
            Frequency::Quarterly => shift_month(from, 3),
            Frequency::Yearly => shift_year(from, 1),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

/// A subscription or other repeating payment with a rolling next-payment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPayment {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub category: String,
    pub next_payment: NaiveDate,
    #[serde(default)]
    pub last_payment: Option<NaiveDate>,
    #[serde(default)]
    pub auto_deduct: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl RecurringPayment {
    /// Records a processed payment: the current due date becomes the last
    /// payment and the schedule rolls forward one cadence step.
    pub fn advance_schedule(&mut self) {
        let paid = self.next_payment;
        self.last_payment = Some(paid);
        self.next_payment = self.frequency.advance(paid);
        self.updated_at = Utc::now();
    }
}

/// Recurring payment fields minus the id and audit stamps.
#[derive(Debug, Clone)]
pub struct NewRecurringPayment {
    pub description: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub category: String,
    pub next_payment: NaiveDate,
    pub auto_deduct: bool,
    pub is_active: bool,
}

impl NewRecurringPayment {
    pub fn into_record(self) -> RecurringPayment {
        let now = Utc::now();
        RecurringPayment {
            id: Uuid::new_v4(),
            description: self.description,
            amount: self.amount,
            frequency: self.frequency,
            category: self.category,
            next_payment: self.next_payment,
            last_payment: None,
            auto_deduct: self.auto_deduct,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let mut day = date.day();
    let month = date.month();
    day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
