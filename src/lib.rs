#![doc(test(attr(deny(warnings))))]

//! Budget Tracker offers the state store, persistence adapter, and derivation
//! functions behind a personal finance tracker: expenses, recurring payments,
//! credit card offers, and payment reminders.

pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod schedule;
pub mod storage;
pub mod store;
pub mod summary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_tracker=info".parse().unwrap());

        fmt().with_env_filter(filter).init();

        tracing::info!("Budget Tracker tracing initialized.");
    });
}
