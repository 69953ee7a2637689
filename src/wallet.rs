//! The wallet provider capability.
//!
//! Everything chain-specific lives behind [`WalletProvider`]: UTXO or
//! account bookkeeping, address classification, key custody, signature
//! production, and network broadcast. The transaction core only ever calls
//! the three operations below and reflects their outcomes into its own
//! fields — it never inspects what the provider did.
//!
//! Exactly one provider instance is bound to a [`Transaction`] at
//! construction and is used for all three operations; it is never swapped.
//!
//! ## Contract
//!
//! Providers receive an exclusive reference to the transaction for every
//! operation. Besides reading `payments()`, `status()` and `provider_data`,
//! they may park their own state in `provider_data`, record a failure
//! detail in `error`, and drive status transitions via `set_status` as a
//! side effect of their work. None of that is required — a provider may
//! equally leave all status transitions to the owner.

use async_trait::async_trait;
use thiserror::Error;

use crate::transaction::Transaction;
use crate::types::{Payment, TransactionFailure};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure vocabulary for provider operations.
///
/// The core propagates these to the caller of the lifecycle method
/// unmodified — no wrapping, no retry, and no automatic status change.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Payment collection failed (invalid address, insufficient funds,
    /// UTXO selection failure, ...).
    #[error("payment collection failed: {0}")]
    PaymentCollection(String),

    /// Signature production failed (user declined, hardware wallet
    /// disconnected, key unavailable, ...).
    #[error("signing failed: {0}")]
    Signing(String),

    /// Broadcast failed (node unreachable, transaction rejected by the
    /// network, ...).
    #[error("submission failed: {0}")]
    Submission(String),

    /// A structured rejection the provider wants surfaced to `on_error`
    /// listeners. Callers typically copy the detail into the
    /// transaction's `error` slot before setting `Errored`.
    #[error("rejected: {0}")]
    Rejected(TransactionFailure),

    /// Any provider-internal cause that doesn't fit the above.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ---------------------------------------------------------------------------
// WalletProvider
// ---------------------------------------------------------------------------

/// The capability a [`Transaction`] delegates its chain-specific work to.
///
/// All three operations are asynchronous; the core awaits them without
/// adding timeouts or cancellation. Implementations decide what "success"
/// means for their chain — the core only records it.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Collect the given payments into the transaction being built.
    ///
    /// The core performs no validation of `payments`; address and amount
    /// checking is this operation's responsibility. On success the core
    /// stores the payments on the transaction in the given order.
    async fn payments_for_transaction(
        &self,
        tx: &mut Transaction,
        payments: &[Payment],
    ) -> Result<(), WalletError>;

    /// Produce and attach a signature for the transaction.
    ///
    /// On success the core marks the transaction signed. Providers that
    /// keep partially-signed state should park it in `tx.provider_data`.
    async fn sign_transaction(&self, tx: &mut Transaction) -> Result<(), WalletError>;

    /// Broadcast the transaction and return its on-chain identifier.
    ///
    /// The returned string becomes the transaction's `hash`. On failure
    /// the core leaves `hash` unset so the caller may retry.
    async fn submit_transaction(&self, tx: &mut Transaction) -> Result<String, WalletError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_error_display() {
        let e = WalletError::Signing("user declined".to_string());
        assert_eq!(e.to_string(), "signing failed: user declined");

        let e = WalletError::Rejected(TransactionFailure::new("fee too low"));
        assert_eq!(e.to_string(), "rejected: fee too low");
    }

    #[test]
    fn wallet_error_from_anyhow_is_transparent() {
        let cause = anyhow::anyhow!("socket closed");
        let e = WalletError::from(cause);
        assert_eq!(e.to_string(), "socket closed");
    }
}
