//! Rolebank Types - Canonical domain types for role-based money transfers
//!
//! This crate contains the foundational types for rolebank with zero
//! dependencies on other rolebank crates:
//!
//! - Identity types (AccountId, TransferId, ContextId)
//! - Amount, a minor-unit money type with checked arithmetic
//! - Role slot names and the error taxonomy
//!
//! # Invariants
//!
//! 1. Balances are unsigned - a negative balance is unrepresentable
//! 2. Amount arithmetic never wraps; overflow surfaces as a typed error
//! 3. Failure is explicit - no silent no-ops

pub mod amount;
pub mod error;
pub mod identity;

pub use amount::*;
pub use error::*;
pub use identity::*;
