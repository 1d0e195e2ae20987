//! Monetary values.
//!
//! # Design Decisions
//! - Amounts are integers in minor units; no floating point anywhere
//! - Comparisons are only defined within a single currency
//! - Cross-currency comparison is an error, never a silent numeric compare

pub mod types;

pub use types::{Currency, Money, MoneyError};
