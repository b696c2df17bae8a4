//! Domain models for the four tracked entity kinds.
//!
//! Pure data types and calendar enums. No I/O, no storage.

pub mod expense;
pub mod offer;
pub mod recurring;
pub mod reminder;

pub use expense::*;
pub use offer::*;
pub use recurring::*;
pub use reminder::*;
