//! Error types for rolebank
//!
//! All failures are explicit: an interaction either commits both of its
//! mutations or surfaces a typed error with no state change.

use crate::{AccountId, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for rolebank operations
pub type Result<T> = std::result::Result<T, RolebankError>;

/// Named role slots in a transfer context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleSlot {
    /// The paying side
    Source,
    /// The receiving side
    Sink,
}

impl RoleSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleSlot::Source => "source",
            RoleSlot::Sink => "sink",
        }
    }
}

impl fmt::Display for RoleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rolebank error types
#[derive(Debug, Clone, Error)]
pub enum RolebankError {
    /// Source balance below the requested amount
    #[error("insufficient funds in account {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: AccountId,
        requested: Amount,
        available: Amount,
    },

    /// Amount rejected before any state was touched
    #[error("invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// A role slot required by the interaction was never populated
    #[error("role slot `{slot}` is not bound")]
    UnboundRole { slot: RoleSlot },

    /// A deposit would overflow the receiving balance
    #[error("deposit would overflow the balance of account {account}")]
    BalanceOverflow { account: AccountId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_amounts() {
        let err = RolebankError::InsufficientFunds {
            account: AccountId::new(),
            requested: Amount::new(10000),
            available: Amount::new(5000),
        };
        let msg = err.to_string();
        assert!(msg.contains("$100.00"));
        assert!(msg.contains("$50.00"));
    }

    #[test]
    fn test_unbound_role_names_the_slot() {
        let err = RolebankError::UnboundRole {
            slot: RoleSlot::Sink,
        };
        assert!(err.to_string().contains("sink"));
    }
}
