use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurring::Frequency;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(label)
    }
}

/// A dated payment reminder. `completed`/`completed_at` move only through the
/// store's mark-complete operation, never through a generic update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReminder {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub reminder_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_frequency: Option<Frequency>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payee_name: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reminder fields minus the id, completion state, and audit stamps.
#[derive(Debug, Clone)]
pub struct NewPaymentReminder {
    pub title: String,
    pub description: String,
    pub amount: Option<f64>,
    pub due_date: NaiveDate,
    pub reminder_date: Option<NaiveDate>,
    pub priority: Priority,
    pub category: String,
    pub is_recurring: bool,
    pub recurring_frequency: Option<Frequency>,
    pub payment_method: String,
    pub payee_name: String,
    pub account_number: String,
    pub notes: String,
}

impl NewPaymentReminder {
    pub fn into_record(self) -> PaymentReminder {
        let now = Utc::now();
        PaymentReminder {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            amount: self.amount,
            due_date: self.due_date,
            reminder_date: self.reminder_date,
            priority: self.priority,
            category: self.category,
            is_recurring: self.is_recurring,
            recurring_frequency: self.recurring_frequency,
            payment_method: self.payment_method,
            payee_name: self.payee_name,
            account_number: self.account_number,
            notes: self.notes,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
