use budget_tracker::domain::{
    ExpenseCategory, Frequency, NewCreditCardOffer, NewExpense, NewPaymentReminder,
    NewRecurringPayment, OfferStatus, OfferType, Priority,
};
use budget_tracker::schedule::sorted_offers;
use budget_tracker::storage::MemoryStore;
use budget_tracker::store::BudgetStore;
use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn empty_store() -> BudgetStore {
    BudgetStore::open(Box::new(MemoryStore::new()))
}

fn expense_draft(description: &str, amount: f64) -> NewExpense {
    NewExpense {
        description: description.into(),
        amount,
        category: ExpenseCategory::Shopping,
        date: date(2024, 6, 10),
    }
}

fn payment_draft(description: &str) -> NewRecurringPayment {
    NewRecurringPayment {
        description: description.into(),
        amount: 9.99,
        frequency: Frequency::Monthly,
        category: "Software".into(),
        next_payment: date(2024, 6, 15),
        auto_deduct: true,
        is_active: true,
    }
}

fn offer_draft(card: &str, expires: NaiveDate) -> NewCreditCardOffer {
    NewCreditCardOffer {
        card_name: card.into(),
        bank_name: "First Bank".into(),
        offer_type: OfferType::SignupBonus,
        reward_amount: Some(200.0),
        requirement_amount: Some(1000.0),
        annual_fee: None,
        expiration_date: expires,
        status: OfferStatus::Active,
        description: String::new(),
        notes: String::new(),
    }
}

fn reminder_draft(title: &str, due: NaiveDate) -> NewPaymentReminder {
    NewPaymentReminder {
        title: title.into(),
        description: String::new(),
        amount: Some(120.0),
        due_date: due,
        reminder_date: None,
        priority: Priority::Medium,
        category: "Utilities".into(),
        is_recurring: false,
        recurring_frequency: None,
        payment_method: "Card".into(),
        payee_name: "Utility Co".into(),
        account_number: String::new(),
        notes: String::new(),
    }
}

#[test]
fn adds_assign_fresh_unique_ids() {
    let mut store = empty_store();
    let first = store.add_expense(expense_draft("Coffee", 4.5));
    let second = store.add_expense(expense_draft("Lunch", 12.0));
    assert_ne!(first, second);
    assert_eq!(store.expenses().len(), 2);
    assert_eq!(store.expenses()[0].id, first);
    assert_eq!(store.expenses()[1].id, second);
}

#[test]
fn update_with_unknown_id_leaves_collection_unchanged() {
    let mut store = empty_store();
    store.add_expense(expense_draft("Coffee", 4.5));
    let before = store.expenses().to_vec();

    let mut stray = expense_draft("Ghost", 1.0).into_record();
    stray.id = Uuid::new_v4();
    store.update_expense(stray);

    assert_eq!(store.expenses(), before.as_slice());
}

#[test]
fn update_replaces_matching_record_wholesale() {
    let mut store = empty_store();
    let id = store.add_expense(expense_draft("Coffee", 4.5));

    let mut replacement = store.expenses()[0].clone();
    replacement.description = "Espresso".into();
    replacement.amount = 5.0;
    store.update_expense(replacement);

    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.expenses()[0].id, id);
    assert_eq!(store.expenses()[0].description, "Espresso");
    assert_eq!(store.expenses()[0].amount, 5.0);
}

#[test]
fn delete_removes_exactly_the_matching_record() {
    let mut store = empty_store();
    let first = store.add_expense(expense_draft("Coffee", 4.5));
    let second = store.add_expense(expense_draft("Lunch", 12.0));

    store.delete_expense(first);
    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.expenses()[0].id, second);

    // Absent id is a silent no-op.
    store.delete_expense(Uuid::new_v4());
    assert_eq!(store.expenses().len(), 1);
}

#[test]
fn recurring_update_refreshes_updated_at() {
    let mut store = empty_store();
    let id = store.add_recurring_payment(payment_draft("Music"));
    let created = store.recurring_payments()[0].updated_at;

    let mut replacement = store.recurring_payments()[0].clone();
    replacement.amount = 11.99;
    store.update_recurring_payment(replacement);

    let stored = &store.recurring_payments()[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.amount, 11.99);
    assert!(stored.updated_at >= created);
}

#[test]
fn process_recurring_payment_rolls_schedule_forward() {
    let mut store = empty_store();
    let mut draft = payment_draft("Rent");
    draft.next_payment = date(2024, 1, 31);
    let id = store.add_recurring_payment(draft);

    let next = store.process_recurring_payment(id);
    assert_eq!(next, Some(date(2024, 2, 29)));

    let stored = &store.recurring_payments()[0];
    assert_eq!(stored.last_payment, Some(date(2024, 1, 31)));
    assert_eq!(stored.next_payment, date(2024, 2, 29));

    assert_eq!(store.process_recurring_payment(Uuid::new_v4()), None);
}

#[test]
fn completing_an_offer_stamps_completion_date_once() {
    let mut store = empty_store();
    let id = store.add_credit_card_offer(offer_draft("Sapphire", date(2024, 12, 31)));
    assert!(store.credit_card_offers()[0].completion_date.is_none());

    store.set_offer_status(id, OfferStatus::Completed);
    let stamped = store.credit_card_offers()[0].completion_date;
    assert!(stamped.is_some());

    // Transitions are unrestricted; leaving and re-entering completed keeps
    // the caller-visible date when one is already present.
    store.set_offer_status(id, OfferStatus::Active);
    store.set_offer_status(id, OfferStatus::Completed);
    assert_eq!(store.credit_card_offers()[0].completion_date, stamped);
}

#[test]
fn offer_update_landing_on_completed_also_stamps() {
    let mut store = empty_store();
    store.add_credit_card_offer(offer_draft("Venture", date(2024, 12, 31)));

    let mut replacement = store.credit_card_offers()[0].clone();
    replacement.status = OfferStatus::Completed;
    replacement.completion_date = None;
    store.update_credit_card_offer(replacement);

    assert!(store.credit_card_offers()[0].completion_date.is_some());
}

#[test]
fn offer_update_preserves_caller_supplied_completion_date() {
    let mut store = empty_store();
    store.add_credit_card_offer(offer_draft("Freedom", date(2024, 12, 31)));

    let chosen = date(2024, 3, 1);
    let mut replacement = store.credit_card_offers()[0].clone();
    replacement.status = OfferStatus::Completed;
    replacement.completion_date = Some(chosen);
    store.update_credit_card_offer(replacement);

    assert_eq!(store.credit_card_offers()[0].completion_date, Some(chosen));
}

#[test]
fn mark_reminder_complete_is_idempotent() {
    let mut store = empty_store();
    let id = store.add_payment_reminder(reminder_draft("Electric", date(2024, 6, 20)));

    store.mark_reminder_complete(id);
    let first_stamp = store.payment_reminders()[0].completed_at;
    assert!(store.payment_reminders()[0].completed);
    assert!(first_stamp.is_some());

    store.mark_reminder_complete(id);
    assert_eq!(store.payment_reminders()[0].completed_at, first_stamp);

    // Unknown id is a silent no-op.
    store.mark_reminder_complete(Uuid::new_v4());
}

#[test]
fn generic_reminder_update_cannot_change_completion_state() {
    let mut store = empty_store();
    let id = store.add_payment_reminder(reminder_draft("Water", date(2024, 6, 20)));
    store.mark_reminder_complete(id);
    let stamp = store.payment_reminders()[0].completed_at;

    let mut replacement = store.payment_reminders()[0].clone();
    replacement.title = "Water bill".into();
    replacement.completed = false;
    replacement.completed_at = None;
    store.update_payment_reminder(replacement);

    let stored = &store.payment_reminders()[0];
    assert_eq!(stored.title, "Water bill");
    assert!(stored.completed);
    assert_eq!(stored.completed_at, stamp);
}

#[test]
fn offers_with_equal_sort_keys_keep_insertion_order() {
    let mut store = empty_store();
    let expires = date(2024, 9, 30);
    let first = store.add_credit_card_offer(offer_draft("Card A", expires));
    let second = store.add_credit_card_offer(offer_draft("Card B", expires));

    let sorted = sorted_offers(store.credit_card_offers());
    assert_eq!(sorted[0].id, first);
    assert_eq!(sorted[1].id, second);
}

#[test]
fn active_offers_sort_ahead_of_other_statuses() {
    let mut store = empty_store();
    let applied = store.add_credit_card_offer(offer_draft("Early", date(2024, 7, 1)));
    store.set_offer_status(applied, OfferStatus::Applied);
    let active = store.add_credit_card_offer(offer_draft("Late", date(2024, 12, 1)));

    let sorted = sorted_offers(store.credit_card_offers());
    assert_eq!(sorted[0].id, active);
    assert_eq!(sorted[1].id, applied);
}
