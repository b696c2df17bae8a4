use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};
use uuid::Uuid;

/// Enumerates the spending categories offered by the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpenseCategory {
    FoodAndDining,
    Shopping,
    Transportation,
    BillsAndUtilities,
    Entertainment,
    HealthAndFitness,
    Travel,
    Business,
    Education,
    PersonalCare,
    HomeAndGarden,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Shopping,
        ExpenseCategory::Transportation,
        ExpenseCategory::BillsAndUtilities,
        ExpenseCategory::Entertainment,
        ExpenseCategory::HealthAndFitness,
        ExpenseCategory::Travel,
        ExpenseCategory::Business,
        ExpenseCategory::Education,
        ExpenseCategory::PersonalCare,
        ExpenseCategory::HomeAndGarden,
        ExpenseCategory::Other,
    ];

    /// Stored label for the category; also the wire representation.
    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::FoodAndDining => "Food & Dining",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::BillsAndUtilities => "Bills & Utilities",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::HealthAndFitness => "Health & Fitness",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Business => "Business",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::PersonalCare => "Personal Care",
            ExpenseCategory::HomeAndGarden => "Home & Garden",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Unrecognized labels fall back to `Other` so stale blobs still load.
    pub fn from_label(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(ExpenseCategory::Other)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ExpenseCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ExpenseCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|label| ExpenseCategory::from_label(&label))
            .unwrap_or_default())
    }
}

/// A single recorded expense. Immutable once created except full replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Expense fields minus the id and audit stamps the store assigns on add.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn into_record(self) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
            created_at: Utc::now(),
        }
    }
}
