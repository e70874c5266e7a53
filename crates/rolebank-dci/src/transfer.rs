//! The money-transfer interaction and its protocol
//!
//! `TransferMoney` binds the supplied accounts into the source and sink
//! roles, holds the resulting context, and exposes a single triggering
//! operation. The protocol runs entirely in terms of role method calls;
//! balance mutations delegate to the entities.
//!
//! Atomicity: both mutations (withdraw from source, deposit into sink)
//! happen inside one critical section holding both entity locks, acquired
//! in account-id order. Every failure is checked before the first mutation,
//! so a transfer either commits both movements or commits neither - no
//! observer on any thread ever sees a partially applied transfer.

use chrono::{DateTime, Utc};
use rolebank_domain::{Account, AccountHandle};
use rolebank_types::{AccountId, Amount, Result, RolebankError, TransferId};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::binding::{MoneySink, MoneySource, RoleBinding};
use crate::context::TransferContext;

/// Proof of an executed transfer, carrying both post-transfer balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub transfer_id: TransferId,
    pub source: AccountId,
    pub sink: AccountId,
    pub amount: Amount,
    pub source_balance_after: Amount,
    pub sink_balance_after: Amount,
    pub executed_at: DateTime<Utc>,
}

impl RoleBinding<MoneySource> {
    /// Move `amount` from this role's player to the context's sink.
    ///
    /// Check-then-act under both entity locks: insufficient funds and a
    /// sink overflow are both detected before either balance changes.
    pub fn transfer_to(&self, ctx: &TransferContext, amount: Amount) -> Result<TransferReceipt> {
        let sink = ctx.sink();

        if self.player().same_account(sink.player()) {
            return self.transfer_to_self(sink, amount);
        }

        let (mut src, mut dst) = AccountHandle::lock_pair(self.player(), sink.player());

        if src.balance < amount {
            warn!(
                "transfer rejected: account {} has {}, requested {}",
                src.id, src.balance, amount
            );
            return Err(RolebankError::InsufficientFunds {
                account: src.id,
                requested: amount,
                available: src.balance,
            });
        }
        // Prove the deposit cannot fail before committing the withdraw
        if dst.balance.checked_add(amount).is_none() {
            return Err(RolebankError::BalanceOverflow { account: dst.id });
        }

        let source_balance_after = src.withdraw(amount)?;
        let sink_balance_after = sink.receive_into(&mut dst, amount)?;

        let receipt = TransferReceipt {
            transfer_id: TransferId::new(),
            source: src.id,
            sink: dst.id,
            amount,
            source_balance_after,
            sink_balance_after,
            executed_at: Utc::now(),
        };
        info!(
            "transfer {} executed: {} from {} to {}",
            receipt.transfer_id, amount, receipt.source, receipt.sink
        );
        Ok(receipt)
    }

    /// Degenerate case: source and sink are the same entity. The balance
    /// check still applies; the net movement is zero under a single lock.
    fn transfer_to_self(
        &self,
        sink: &RoleBinding<MoneySink>,
        amount: Amount,
    ) -> Result<TransferReceipt> {
        let mut player = self.player().lock();

        if player.balance < amount {
            return Err(RolebankError::InsufficientFunds {
                account: player.id,
                requested: amount,
                available: player.balance,
            });
        }
        player.withdraw(amount)?;
        let balance_after = sink.receive_into(&mut player, amount)?;

        Ok(TransferReceipt {
            transfer_id: TransferId::new(),
            source: player.id,
            sink: player.id,
            amount,
            source_balance_after: balance_after,
            sink_balance_after: balance_after,
            executed_at: Utc::now(),
        })
    }
}

impl RoleBinding<MoneySink> {
    /// Increase the player's balance by `amount`.
    ///
    /// Standalone form of the sink role's behavior: locks its own player.
    /// Returns the new balance.
    pub fn receive(&self, _ctx: &TransferContext, amount: Amount) -> Result<Amount> {
        self.player().lock().deposit(amount)
    }

    /// Deposit into the already-locked player, called by the source role
    /// while it holds the pair's critical section.
    fn receive_into(&self, player: &mut Account, amount: Amount) -> Result<Amount> {
        player.deposit(amount)
    }
}

/// The use-case orchestrator: builds the context, offers the trigger.
#[derive(Debug, Clone)]
pub struct TransferMoney {
    context: TransferContext,
}

impl TransferMoney {
    /// Bind `source` and `sink` into their roles and build the context.
    pub fn new(source: AccountHandle, sink: AccountHandle) -> Self {
        Self {
            context: TransferContext::bind(source, sink),
        }
    }

    /// Run the interaction over a context composed elsewhere.
    pub fn with_context(context: TransferContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &TransferContext {
        &self.context
    }

    /// Execute the transfer protocol for `amount`.
    ///
    /// Each call is an independent run against the current balances.
    pub fn invoke(&self, amount: Amount) -> Result<TransferReceipt> {
        if amount.is_zero() {
            return Err(RolebankError::InvalidAmount {
                reason: "transfer amount must be greater than zero".to_string(),
            });
        }
        self.context.source().transfer_to(&self.context, amount)
    }
}
