//! The state store: single source of truth for all four collections.
//!
//! Mutations apply synchronously to the in-memory state, then trigger exactly
//! one full-state write to the persistence adapter. Persistence failures are
//! logged and swallowed; the in-memory state stays authoritative for the
//! session. Not-found updates and deletes are silent no-ops so stale views
//! cannot fault the store.

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    CreditCardOffer, Expense, NewCreditCardOffer, NewExpense, NewPaymentReminder,
    NewRecurringPayment, OfferStatus, PaymentReminder, RecurringPayment,
};
use crate::storage::StateStore;

/// The persisted blob: four insertion-ordered collections. Display order is
/// always derived, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub recurring_payments: Vec<RecurringPayment>,
    #[serde(default)]
    pub credit_card_offers: Vec<CreditCardOffer>,
    #[serde(default)]
    pub payment_reminders: Vec<PaymentReminder>,
}

impl BudgetState {
    /// Decodes a persisted blob, degrading per collection: a missing or
    /// malformed key yields an empty collection instead of a failed startup.
    pub fn from_blob(blob: &str) -> Self {
        let value: Value = match serde_json::from_str(blob) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "persisted state unreadable; starting empty");
                return Self::default();
            }
        };
        Self {
            expenses: decode_collection(&value, "expenses"),
            recurring_payments: decode_collection(&value, "recurringPayments"),
            credit_card_offers: decode_collection(&value, "creditCardOffers"),
            payment_reminders: decode_collection(&value, "paymentReminders"),
        }
    }
}

fn decode_collection<T: DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    match value.get(key) {
        None => Vec::new(),
        Some(raw) => match serde_json::from_value(raw.clone()) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key, error = %err, "collection unreadable; dropping it");
                Vec::new()
            }
        },
    }
}

/// State-owning service: applies mutations and persists after each one.
/// Instantiate once per session and pass by reference to consumers.
pub struct BudgetStore {
    state: BudgetState,
    storage: Box<dyn StateStore>,
}

impl BudgetStore {
    /// Opens the store, performing the single startup read. A failed read
    /// logs a warning and starts an empty session.
    pub fn open(storage: Box<dyn StateStore>) -> Self {
        let state = match storage.read() {
            Ok(Some(blob)) => BudgetState::from_blob(&blob),
            Ok(None) => BudgetState::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read persisted state; starting empty");
                BudgetState::default()
            }
        };
        Self { state, storage }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn recurring_payments(&self) -> &[RecurringPayment] {
        &self.state.recurring_payments
    }

    pub fn credit_card_offers(&self) -> &[CreditCardOffer] {
        &self.state.credit_card_offers
    }

    pub fn payment_reminders(&self) -> &[PaymentReminder] {
        &self.state.payment_reminders
    }

    /// Replaces the in-memory state wholesale. Startup path; does not write.
    pub fn replace_state(&mut self, state: BudgetState) {
        self.state = state;
    }

    pub fn add_expense(&mut self, draft: NewExpense) -> Uuid {
        let record = draft.into_record();
        let id = record.id;
        self.state.expenses.push(record);
        self.persist();
        id
    }

    /// Replaces the expense with the same id. No-op when the id is unknown.
    pub fn update_expense(&mut self, expense: Expense) {
        if let Some(slot) = self.state.expenses.iter_mut().find(|e| e.id == expense.id) {
            *slot = expense;
            self.persist();
        }
    }

    pub fn delete_expense(&mut self, id: Uuid) {
        self.remove_by_id(|state| &mut state.expenses, id);
    }

    pub fn add_recurring_payment(&mut self, draft: NewRecurringPayment) -> Uuid {
        let record = draft.into_record();
        let id = record.id;
        self.state.recurring_payments.push(record);
        self.persist();
        id
    }

    pub fn update_recurring_payment(&mut self, mut payment: RecurringPayment) {
        payment.updated_at = Utc::now();
        if let Some(slot) = self
            .state
            .recurring_payments
            .iter_mut()
            .find(|p| p.id == payment.id)
        {
            *slot = payment;
            self.persist();
        }
    }

    pub fn delete_recurring_payment(&mut self, id: Uuid) {
        self.remove_by_id(|state| &mut state.recurring_payments, id);
    }

    /// Rolls the payment's schedule forward one cadence step, recording the
    /// paid date. Returns the new next-payment date when the id is known.
    pub fn process_recurring_payment(&mut self, id: Uuid) -> Option<chrono::NaiveDate> {
        let next = {
            let payment = self
                .state
                .recurring_payments
                .iter_mut()
                .find(|p| p.id == id)?;
            payment.advance_schedule();
            payment.next_payment
        };
        self.persist();
        Some(next)
    }

    pub fn add_credit_card_offer(&mut self, draft: NewCreditCardOffer) -> Uuid {
        let mut record = draft.into_record();
        stamp_completion(&mut record);
        let id = record.id;
        self.state.credit_card_offers.push(record);
        self.persist();
        id
    }

    pub fn update_credit_card_offer(&mut self, mut offer: CreditCardOffer) {
        offer.updated_at = Utc::now();
        stamp_completion(&mut offer);
        if let Some(slot) = self
            .state
            .credit_card_offers
            .iter_mut()
            .find(|o| o.id == offer.id)
        {
            *slot = offer;
            self.persist();
        }
    }

    pub fn delete_credit_card_offer(&mut self, id: Uuid) {
        self.remove_by_id(|state| &mut state.credit_card_offers, id);
    }

    /// Moves an offer to `status`. All transitions are allowed; entering
    /// `completed` stamps today's completion date when none is set.
    pub fn set_offer_status(&mut self, id: Uuid, status: OfferStatus) {
        let Some(offer) = self
            .state
            .credit_card_offers
            .iter_mut()
            .find(|o| o.id == id)
        else {
            return;
        };
        offer.status = status;
        offer.updated_at = Utc::now();
        stamp_completion(offer);
        self.persist();
    }

    pub fn add_payment_reminder(&mut self, draft: NewPaymentReminder) -> Uuid {
        let record = draft.into_record();
        let id = record.id;
        self.state.payment_reminders.push(record);
        self.persist();
        id
    }

    /// Replaces the reminder with the same id, preserving the stored
    /// completion state: `completed`/`completed_at` only move through
    /// [`BudgetStore::mark_reminder_complete`].
    pub fn update_payment_reminder(&mut self, mut reminder: PaymentReminder) {
        reminder.updated_at = Utc::now();
        if let Some(slot) = self
            .state
            .payment_reminders
            .iter_mut()
            .find(|r| r.id == reminder.id)
        {
            reminder.completed = slot.completed;
            reminder.completed_at = slot.completed_at;
            *slot = reminder;
            self.persist();
        }
    }

    pub fn delete_payment_reminder(&mut self, id: Uuid) {
        self.remove_by_id(|state| &mut state.payment_reminders, id);
    }

    /// Marks a reminder complete, stamping `completed_at` on the first
    /// transition only. Idempotent: repeat calls leave the stamp untouched.
    pub fn mark_reminder_complete(&mut self, id: Uuid) {
        let Some(reminder) = self
            .state
            .payment_reminders
            .iter_mut()
            .find(|r| r.id == id)
        else {
            return;
        };
        if reminder.completed {
            return;
        }
        let now = Utc::now();
        reminder.completed = true;
        reminder.completed_at = Some(now);
        reminder.updated_at = now;
        self.persist();
    }

    fn remove_by_id<T: HasId>(
        &mut self,
        collection: impl Fn(&mut BudgetState) -> &mut Vec<T>,
        id: Uuid,
    ) {
        let items = collection(&mut self.state);
        let before = items.len();
        items.retain(|item| item.id() != id);
        let changed = items.len() != before;
        if changed {
            self.persist();
        }
    }

    fn persist(&self) {
        let blob = match serde_json::to_string_pretty(&self.state) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize state; skipping write");
                return;
            }
        };
        if let Err(err) = self.storage.write(&blob) {
            tracing::warn!(error = %err, "failed to persist state; keeping in-memory changes");
        }
    }
}

fn stamp_completion(offer: &mut CreditCardOffer) {
    if offer.status == OfferStatus::Completed && offer.completion_date.is_none() {
        offer.completion_date = Some(Utc::now().date_naive());
    }
}

trait HasId {
    fn id(&self) -> Uuid;
}

impl HasId for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for RecurringPayment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for CreditCardOffer {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for PaymentReminder {
    fn id(&self) -> Uuid {
        self.id
    }
}
