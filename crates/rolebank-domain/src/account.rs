//! The account entity and its shared handle

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use rolebank_types::{AccountId, Amount, Result, RolebankError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A plain data entity: identity plus mutable balance state.
///
/// The account carries no use-case behavior of its own beyond the primitive
/// value mutations below, which any bound role delegates to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity - never changes
    pub id: AccountId,
    /// Human-readable label (e.g. "alice")
    pub label: String,
    /// Current balance in minor units
    pub balance: Amount,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with an opening balance
    pub fn new(label: impl Into<String>, opening_balance: Amount) -> Self {
        let account = Self {
            id: AccountId::new(),
            label: label.into(),
            balance: opening_balance,
            created_at: Utc::now(),
        };
        debug!("account {} created with balance {}", account.id, account.balance);
        account
    }

    /// Increase the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(RolebankError::BalanceOverflow { account: self.id })?;
        self.balance = new_balance;
        Ok(new_balance)
    }

    /// Decrease the balance. Returns the new balance.
    ///
    /// Fails if the balance would go negative (invariant: no negative
    /// balances), leaving the account untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount> {
        let new_balance =
            self.balance
                .checked_sub(amount)
                .ok_or(RolebankError::InsufficientFunds {
                    account: self.id,
                    requested: amount,
                    available: self.balance,
                })?;
        self.balance = new_balance;
        Ok(new_balance)
    }
}

/// Shared, lockable handle to an account.
///
/// Bindings and contexts hold clones of this handle, never copies of the
/// account itself. Every clone observes the same balance through the same
/// per-entity lock, so an account bound into several contexts at once stays
/// consistent across all of them.
#[derive(Debug, Clone)]
pub struct AccountHandle {
    id: AccountId,
    inner: Arc<Mutex<Account>>,
}

impl AccountHandle {
    pub fn new(account: Account) -> Self {
        Self {
            id: account.id,
            inner: Arc::new(Mutex::new(account)),
        }
    }

    /// Identity of the underlying account. Lock-free: identity never changes.
    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn label(&self) -> String {
        self.inner.lock().label.clone()
    }

    /// Current balance (short lock)
    pub fn balance(&self) -> Amount {
        self.inner.lock().balance
    }

    /// Exclusive access to the account for the duration of a mutation
    pub fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock()
    }

    /// Whether two handles refer to the same underlying account
    pub fn same_account(&self, other: &AccountHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Lock two distinct accounts, ordered by account id.
    ///
    /// The deterministic order means two interactions moving money between
    /// the same pair in opposite directions acquire the locks in the same
    /// sequence and cannot deadlock. Callers must route same-account pairs
    /// through a single `lock` instead.
    pub fn lock_pair<'a>(
        a: &'a AccountHandle,
        b: &'a AccountHandle,
    ) -> (MutexGuard<'a, Account>, MutexGuard<'a, Account>) {
        debug_assert!(!a.same_account(b), "lock_pair requires distinct accounts");
        if a.id() <= b.id() {
            let guard_a = a.lock();
            let guard_b = b.lock();
            (guard_a, guard_b)
        } else {
            let guard_b = b.lock();
            let guard_a = a.lock();
            (guard_a, guard_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(v: u64) -> Amount {
        Amount::new(v)
    }

    #[test]
    fn test_account_creation() {
        let account = Account::new("alice", cents(100_000));
        assert_eq!(account.label, "alice");
        assert_eq!(account.balance, cents(100_000));
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut account = Account::new("alice", cents(1000));

        assert_eq!(account.deposit(cents(500)).unwrap(), cents(1500));
        assert_eq!(account.withdraw(cents(300)).unwrap(), cents(1200));
        assert_eq!(account.balance, cents(1200));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = Account::new("alice", cents(100));

        let result = account.withdraw(cents(200));
        assert!(matches!(
            result,
            Err(RolebankError::InsufficientFunds { .. })
        ));
        // Failed withdraw leaves the balance untouched
        assert_eq!(account.balance, cents(100));
    }

    #[test]
    fn test_deposit_overflow() {
        let mut account = Account::new("alice", Amount::new(u64::MAX));

        let result = account.deposit(cents(1));
        assert!(matches!(result, Err(RolebankError::BalanceOverflow { .. })));
        assert_eq!(account.balance, Amount::new(u64::MAX));
    }

    #[test]
    fn test_handle_clones_share_state() {
        let handle = AccountHandle::new(Account::new("alice", cents(1000)));
        let clone = handle.clone();

        handle.lock().deposit(cents(500)).unwrap();
        assert_eq!(clone.balance(), cents(1500));
        assert!(handle.same_account(&clone));
    }

    #[test]
    fn test_lock_pair_orders_by_id() {
        let a = AccountHandle::new(Account::new("a", cents(100)));
        let b = AccountHandle::new(Account::new("b", cents(100)));

        // Either argument order yields guards for the matching handles
        let (guard_a, guard_b) = AccountHandle::lock_pair(&a, &b);
        assert_eq!(guard_a.id, a.id());
        assert_eq!(guard_b.id, b.id());
        drop((guard_a, guard_b));

        let (guard_b, guard_a) = AccountHandle::lock_pair(&b, &a);
        assert_eq!(guard_a.id, a.id());
        assert_eq!(guard_b.id, b.id());
    }
}
