//! Rolebank Domain - the Data layer
//!
//! `Account` is a plain data holder: identity, a label, and a mutable
//! balance, with primitive deposit/withdraw operations. It knows nothing
//! about roles, contexts, or interactions - use-case behavior is attached
//! externally, for the duration of that use case only, and discarded
//! afterwards without leaving a trace on the entity.
//!
//! # Invariants
//!
//! 1. State lives on the account and nowhere else
//! 2. Balances never go negative and never wrap
//! 3. Mutation requires the entity's lock

pub mod account;

pub use account::*;
