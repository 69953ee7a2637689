//! The observable transaction lifecycle state machine.
//!
//! A [`Transaction`] is a single-use, single-pass object representing one
//! in-flight transaction. It owns its payment list, signed flag, submission
//! hash, error slot, and listener registry; it delegates the three
//! state-advancing operations (collect payments, sign, submit) to the
//! [`WalletProvider`] it was constructed with, and records each outcome in
//! its own fields once the delegated work settles.
//!
//! ## Status vs. settled fields
//!
//! The lifecycle operations intentionally do **not** touch `status`. "What
//! phase are we conceptually in" is driven explicitly by the owner (or the
//! provider, as a side effect of its own work) through [`set_status`];
//! "did the delegated async step succeed" is reflected in the settled
//! fields (`payments`, `is_signed`, `hash`). This lets a host set
//! `Signing` before awaiting `sign()`, or drive finer-grained transitions,
//! while listeners react uniformly to whichever status is set.
//!
//! ## Listener dispatch
//!
//! Assigning a status stores the new value and then invokes every
//! registered listener, synchronously, in registration order, on the
//! caller's stack. Dispatch is unconditional — the raw listener sees every
//! change and the phase helpers (`on_signing`, `on_submitted`, ...) filter
//! on the current status themselves. Registration is append-only; there is
//! no unsubscribe.
//!
//! [`set_status`]: Transaction::set_status

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::LifecycleError;
use crate::types::{Payment, TransactionFailure, TransactionStatus};
use crate::wallet::WalletProvider;

/// A status-change listener. Receives the transaction after every
/// assignment to its status, regardless of the value assigned.
type TransactionCallback = Box<dyn FnMut(&Transaction) + Send>;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// One in-flight transaction, bound to a single wallet provider.
///
/// Created in the `Building` phase with no payments, unsigned, and no
/// hash. Each of the three lifecycle operations may succeed at most once
/// per instance (`pay_to_addresses` is deliberately unguarded, see its
/// docs); there is no reset.
///
/// # Example
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use txflow::{Payment, Transaction, TransactionStatus, WalletProvider};
/// # async fn demo(provider: Arc<dyn WalletProvider>) -> anyhow::Result<()> {
/// let mut tx = Transaction::new(provider);
/// tx.on_submitted(|tx| println!("on chain: {:?}", tx.hash()))
///     .on_error(|tx| eprintln!("failed: {:?}", tx.error));
///
/// tx.pay_to_addresses(vec![Payment::new("addr1qxy...", 2_500_000)])
///     .await?;
/// tx.set_status(TransactionStatus::Signing);
/// tx.sign().await?;
/// tx.set_status(TransactionStatus::Submitting);
/// tx.submit().await?;
/// tx.set_status(TransactionStatus::Submitted);
/// # Ok(())
/// # }
/// ```
pub struct Transaction {
    /// Open provider-defined state attached to this transaction. The core
    /// never reads or writes it.
    pub provider_data: serde_json::Value,

    /// Failure detail, set by the owner or provider on error paths. The
    /// lifecycle methods never write this.
    pub error: Option<TransactionFailure>,

    hash: Option<String>,
    is_signed: bool,
    payments: Vec<Payment>,
    wallet: Arc<dyn WalletProvider>,
    status: TransactionStatus,
    listeners: Vec<TransactionCallback>,
}

impl Transaction {
    /// Creates a transaction bound to the given wallet provider.
    ///
    /// The provider is used for all three delegated operations and is
    /// never swapped for the lifetime of the transaction.
    pub fn new(wallet: Arc<dyn WalletProvider>) -> Self {
        Self {
            provider_data: serde_json::Value::Object(serde_json::Map::new()),
            error: None,
            hash: None,
            is_signed: false,
            payments: Vec::new(),
            wallet,
            status: TransactionStatus::Building,
            listeners: Vec::new(),
        }
    }

    /// The on-chain identifier, present only after a successful
    /// [`submit`](Self::submit).
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Whether a [`sign`](Self::sign) call has succeeded.
    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// The collected payments, in the order the caller supplied them.
    /// Empty until a [`pay_to_addresses`](Self::pay_to_addresses) call
    /// succeeds.
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// The current lifecycle phase.
    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Assigns a new status and notifies every listener.
    ///
    /// The stored status is updated first, then each registered listener
    /// is invoked in registration order with a reference to this
    /// transaction. Dispatch is synchronous and runs to completion before
    /// this method returns; no suspension occurs mid-dispatch.
    ///
    /// # Panics
    ///
    /// A panicking listener unwinds through this method. Listeners
    /// registered after the panicking one do not run for that change, and
    /// the registry does not survive the unwind.
    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = status;
        trace!(%status, listeners = self.listeners.len(), "transaction status changed");

        // Listeners only get a shared reference, so they cannot register
        // new listeners mid-dispatch; swapping the registry out is safe.
        let mut listeners = std::mem::take(&mut self.listeners);
        for callback in listeners.iter_mut() {
            callback(&*self);
        }
        self.listeners = listeners;
    }

    // -----------------------------------------------------------------------
    // Lifecycle operations
    // -----------------------------------------------------------------------

    /// Collects `payments` into this transaction via the wallet provider.
    ///
    /// The core performs no validation; the payments are handed to the
    /// provider as-is. On success they are stored on the transaction in
    /// the given order and the transaction is returned for chaining. On
    /// provider failure the error propagates unmodified and `payments`
    /// is left untouched.
    ///
    /// Does not change `status`. Unlike [`sign`](Self::sign) and
    /// [`submit`](Self::submit) there is no re-entry guard: calling this
    /// again after a success replaces the stored payments. Callers that
    /// need single-shot semantics must enforce them.
    pub async fn pay_to_addresses(
        &mut self,
        payments: Vec<Payment>,
    ) -> Result<&mut Self, LifecycleError> {
        debug!(payment_count = payments.len(), "delegating payment collection");
        let wallet = Arc::clone(&self.wallet);
        wallet.payments_for_transaction(self, &payments).await?;

        self.payments = payments;
        Ok(self)
    }

    /// Signs this transaction via the wallet provider.
    ///
    /// Fails immediately with [`LifecycleError::AlreadySigned`] — before
    /// any provider call — if a previous `sign()` already succeeded. On
    /// success `is_signed` becomes `true`; on provider failure the error
    /// propagates unmodified and `is_signed` stays `false`.
    pub async fn sign(&mut self) -> Result<&mut Self, LifecycleError> {
        if self.is_signed {
            return Err(LifecycleError::AlreadySigned);
        }

        debug!("delegating signing");
        let wallet = Arc::clone(&self.wallet);
        wallet.sign_transaction(self).await?;

        self.is_signed = true;
        Ok(self)
    }

    /// Submits this transaction via the wallet provider.
    ///
    /// Preconditions, checked in order before any provider call:
    /// [`LifecycleError::NotSigned`] if no `sign()` has succeeded, then
    /// [`LifecycleError::AlreadySubmitted`] if a hash is already stored.
    ///
    /// On success the identifier returned by the provider becomes this
    /// transaction's `hash`. On provider failure the error propagates
    /// unmodified and `hash` stays unset, so `submit()` may be retried
    /// once the underlying issue is corrected.
    pub async fn submit(&mut self) -> Result<&mut Self, LifecycleError> {
        if !self.is_signed {
            return Err(LifecycleError::NotSigned);
        }
        if self.hash.is_some() {
            return Err(LifecycleError::AlreadySubmitted);
        }

        debug!("delegating submission");
        let wallet = Arc::clone(&self.wallet);
        let hash = wallet.submit_transaction(self).await?;

        debug!(tx_hash = %hash, "transaction submitted");
        self.hash = Some(hash);
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Phase subscriptions
    // -----------------------------------------------------------------------

    /// Registers a callback for assignments of `Building`.
    pub fn on_building(
        &mut self,
        callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.on_status(TransactionStatus::Building, callback)
    }

    /// Registers a callback for assignments of `Signing`.
    pub fn on_signing(
        &mut self,
        callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.on_status(TransactionStatus::Signing, callback)
    }

    /// Registers a callback for assignments of `Submitting`.
    pub fn on_submitting(
        &mut self,
        callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.on_status(TransactionStatus::Submitting, callback)
    }

    /// Registers a callback for assignments of `Submitted`.
    pub fn on_submitted(
        &mut self,
        callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.on_status(TransactionStatus::Submitted, callback)
    }

    /// Registers a callback for assignments of `Errored`.
    pub fn on_error(
        &mut self,
        callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.on_status(TransactionStatus::Errored, callback)
    }

    /// Registers a callback for either terminal phase, `Submitted` or
    /// `Errored`.
    pub fn on_finally(
        &mut self,
        mut callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.add_listener(move |tx| {
            if tx.status().is_terminal() {
                callback(tx);
            }
        });
        self
    }

    fn on_status(
        &mut self,
        phase: TransactionStatus,
        mut callback: impl FnMut(&Transaction) + Send + 'static,
    ) -> &mut Self {
        self.add_listener(move |tx| {
            if tx.status() == phase {
                callback(tx);
            }
        });
        self
    }

    fn add_listener(&mut self, callback: impl FnMut(&Transaction) + Send + 'static) {
        self.listeners.push(Box::new(callback));
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("status", &self.status)
            .field("is_signed", &self.is_signed)
            .field("hash", &self.hash)
            .field("payments", &self.payments)
            .field("error", &self.error)
            .field("provider_data", &self.provider_data)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
