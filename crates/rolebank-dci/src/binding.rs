//! Role definitions and the role-binding mechanism
//!
//! Roles are stateless method sets. Binding composes a role with an account
//! handle: the result exposes the role's methods (defined in per-role impl
//! blocks, see `transfer`) plus explicit delegation to the entity's own
//! operations, and holds no state of its own. Dropping the binding leaves
//! the account exactly as it was - binding is attachment of behavior, never
//! re-creation of the entity.

use rolebank_domain::AccountHandle;
use rolebank_types::{AccountId, Amount};

/// The paying side of a transfer.
///
/// Stateless marker; the role's behavior is `transfer_to` on
/// `RoleBinding<MoneySource>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneySource;

/// The receiving side of a transfer.
///
/// Stateless marker; the role's behavior is `receive` on
/// `RoleBinding<MoneySink>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneySink;

/// A role attached to an account for the duration of one interaction.
///
/// The binding holds the player's handle and the zero-sized role value,
/// nothing else. Name resolution has two levels: role methods defined for
/// the concrete `R`, and the delegation methods below that fall through to
/// the entity. Code holding the raw handle keeps seeing the unchanged
/// account, so the same entity can play different roles in different
/// contexts concurrently.
#[derive(Debug, Clone)]
pub struct RoleBinding<R> {
    player: AccountHandle,
    #[allow(dead_code)]
    role: R,
}

impl<R> RoleBinding<R> {
    /// Attach `role` to an already-constructed account.
    pub fn bind(player: AccountHandle, role: R) -> Self {
        Self { player, role }
    }

    /// The account playing this role.
    pub fn player(&self) -> &AccountHandle {
        &self.player
    }

    // Delegation to the entity. State lives only on the account; reads
    // through this binding, through any other binding of the same account,
    // and through the raw handle all observe the same values.

    pub fn account_id(&self) -> AccountId {
        self.player.id()
    }

    pub fn label(&self) -> String {
        self.player.label()
    }

    pub fn balance(&self) -> Amount {
        self.player.balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolebank_domain::Account;

    fn cents(v: u64) -> Amount {
        Amount::new(v)
    }

    #[test]
    fn test_binding_delegates_to_entity() {
        let handle = AccountHandle::new(Account::new("alice", cents(1000)));
        let binding = RoleBinding::bind(handle.clone(), MoneySource);

        assert_eq!(binding.account_id(), handle.id());
        assert_eq!(binding.label(), "alice");
        assert_eq!(binding.balance(), cents(1000));
    }

    #[test]
    fn test_binding_is_non_destructive() {
        let handle = AccountHandle::new(Account::new("alice", cents(1000)));

        {
            let _source = RoleBinding::bind(handle.clone(), MoneySource);
            let _sink = RoleBinding::bind(handle.clone(), MoneySink);
        }

        // Bindings discarded; the account is unchanged and usable directly
        assert_eq!(handle.balance(), cents(1000));
        handle.lock().deposit(cents(1)).unwrap();
        assert_eq!(handle.balance(), cents(1001));
    }

    #[test]
    fn test_bindings_share_one_balance() {
        let handle = AccountHandle::new(Account::new("alice", cents(1000)));
        let first = RoleBinding::bind(handle.clone(), MoneySource);
        let second = RoleBinding::bind(handle.clone(), MoneySink);

        handle.lock().withdraw(cents(400)).unwrap();

        // No stale copies: every view reads the entity itself
        assert_eq!(first.balance(), cents(600));
        assert_eq!(second.balance(), cents(600));
    }
}
