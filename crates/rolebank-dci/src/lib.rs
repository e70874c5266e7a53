//! Rolebank DCI - role binding, contexts, and the transfer interaction
//!
//! The Context and Interaction layers of the Data-Context-Interaction triad.
//! A `RoleBinding` attaches a role's method set to an account for the
//! duration of one interaction: role methods live on the binding, everything
//! else falls through to the entity, and the entity's own type is never
//! touched. `TransferContext` holds one named binding per role slot;
//! `TransferMoney` builds the context and triggers the protocol.
//!
//! # Invariants
//!
//! 1. A binding never copies entity state - the account is the single
//!    source of truth, observed through its shared handle
//! 2. A context's role slots are fixed at construction
//! 3. A transfer commits both of its mutations or commits neither
//! 4. Failure is explicit - no silent no-ops

pub mod binding;
pub mod context;
pub mod transfer;

pub use binding::*;
pub use context::*;
pub use transfer::*;
