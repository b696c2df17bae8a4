use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enumerates the promotional offer kinds tracked per card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OfferType {
    SignupBonus,
    Cashback,
    Points,
    BalanceTransfer,
    NoAnnualFee,
    IntroApr,
    Other,
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OfferType::SignupBonus => "Sign-up Bonus",
            OfferType::Cashback => "Cashback Offer",
            OfferType::Points => "Points/Miles",
            OfferType::BalanceTransfer => "Balance Transfer",
            OfferType::NoAnnualFee => "No Annual Fee",
            OfferType::IntroApr => "Intro APR",
            OfferType::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Application lifecycle state for an offer. Transitions are unrestricted;
/// any status may follow any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Active,
    Applied,
    Approved,
    Completed,
    Expired,
    Declined,
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OfferStatus::Active => "active",
            OfferStatus::Applied => "applied",
            OfferStatus::Approved => "approved",
            OfferStatus::Completed => "completed",
            OfferStatus::Expired => "expired",
            OfferStatus::Declined => "declined",
        };
        f.write_str(label)
    }
}

/// A credit card promotional offer with an expiration date and an
/// application-lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardOffer {
    pub id: Uuid,
    pub card_name: String,
    pub bank_name: String,
    pub offer_type: OfferType,
    #[serde(default)]
    pub reward_amount: Option<f64>,
    #[serde(default)]
    pub requirement_amount: Option<f64>,
    #[serde(default)]
    pub annual_fee: Option<f64>,
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub status: OfferStatus,
    #[serde(default)]
    pub application_date: Option<NaiveDate>,
    #[serde(default)]
    pub approval_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Offer fields minus the id and audit stamps.
#[derive(Debug, Clone)]
pub struct NewCreditCardOffer {
    pub card_name: String,
    pub bank_name: String,
    pub offer_type: OfferType,
    pub reward_amount: Option<f64>,
    pub requirement_amount: Option<f64>,
    pub annual_fee: Option<f64>,
    pub expiration_date: NaiveDate,
    pub status: OfferStatus,
    pub description: String,
    pub notes: String,
}

impl NewCreditCardOffer {
    pub fn into_record(self) -> CreditCardOffer {
        let now = Utc::now();
        CreditCardOffer {
            id: Uuid::new_v4(),
            card_name: self.card_name,
            bank_name: self.bank_name,
            offer_type: self.offer_type,
            reward_amount: self.reward_amount,
            requirement_amount: self.requirement_amount,
            annual_fee: self.annual_fee,
            expiration_date: self.expiration_date,
            status: self.status,
            application_date: None,
            approval_date: None,
            completion_date: None,
            description: self.description,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}
