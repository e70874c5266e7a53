//! The transfer context: one named role binding per slot
//!
//! Built once per interaction and immutable afterwards - role composition
//! is a one-shot, interaction-scoped decision. Protocol logic and
//! cross-role calls read the bound roles through the accessors. A slot left
//! unpopulated surfaces as `UnboundRole` at build time, before any protocol
//! can run.

use chrono::{DateTime, Utc};
use rolebank_domain::AccountHandle;
use rolebank_types::{ContextId, Result, RoleSlot, RolebankError};

use crate::binding::{MoneySink, MoneySource, RoleBinding};

/// The set of role bindings participating in one transfer.
#[derive(Debug, Clone)]
pub struct TransferContext {
    id: ContextId,
    source: RoleBinding<MoneySource>,
    sink: RoleBinding<MoneySink>,
    created_at: DateTime<Utc>,
}

impl TransferContext {
    /// Build a context slot by slot.
    pub fn builder() -> TransferContextBuilder {
        TransferContextBuilder::default()
    }

    /// Bind both slots at once.
    pub fn bind(source: AccountHandle, sink: AccountHandle) -> Self {
        Self {
            id: ContextId::new(),
            source: RoleBinding::bind(source, MoneySource),
            sink: RoleBinding::bind(sink, MoneySink),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The bound source role
    pub fn source(&self) -> &RoleBinding<MoneySource> {
        &self.source
    }

    /// The bound sink role
    pub fn sink(&self) -> &RoleBinding<MoneySink> {
        &self.sink
    }
}

/// Collects role bindings one slot at a time.
///
/// `build` refuses to produce a context with an unpopulated slot, so every
/// context the protocol ever sees is fully bound.
#[derive(Debug, Default)]
pub struct TransferContextBuilder {
    source: Option<RoleBinding<MoneySource>>,
    sink: Option<RoleBinding<MoneySink>>,
}

impl TransferContextBuilder {
    pub fn source(mut self, player: AccountHandle) -> Self {
        self.source = Some(RoleBinding::bind(player, MoneySource));
        self
    }

    pub fn sink(mut self, player: AccountHandle) -> Self {
        self.sink = Some(RoleBinding::bind(player, MoneySink));
        self
    }

    pub fn build(self) -> Result<TransferContext> {
        let source = self.source.ok_or(RolebankError::UnboundRole {
            slot: RoleSlot::Source,
        })?;
        let sink = self.sink.ok_or(RolebankError::UnboundRole {
            slot: RoleSlot::Sink,
        })?;
        Ok(TransferContext {
            id: ContextId::new(),
            source,
            sink,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolebank_domain::Account;
    use rolebank_types::Amount;

    fn handle(label: &str, balance: u64) -> AccountHandle {
        AccountHandle::new(Account::new(label, Amount::new(balance)))
    }

    #[test]
    fn test_builder_populates_both_slots() {
        let source = handle("src", 1000);
        let sink = handle("dst", 0);

        let context = TransferContext::builder()
            .source(source.clone())
            .sink(sink.clone())
            .build()
            .unwrap();

        assert_eq!(context.source().account_id(), source.id());
        assert_eq!(context.sink().account_id(), sink.id());
    }

    #[test]
    fn test_missing_source_slot() {
        let result = TransferContext::builder().sink(handle("dst", 0)).build();
        assert!(matches!(
            result,
            Err(RolebankError::UnboundRole {
                slot: RoleSlot::Source
            })
        ));
    }

    #[test]
    fn test_missing_sink_slot() {
        let result = TransferContext::builder().source(handle("src", 0)).build();
        assert!(matches!(
            result,
            Err(RolebankError::UnboundRole {
                slot: RoleSlot::Sink
            })
        ));
    }
}
