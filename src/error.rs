//! Error type for the transaction lifecycle operations.
//!
//! Two failure families exist and they behave differently:
//!
//! - **Precondition violations** (`AlreadySigned`, `NotSigned`,
//!   `AlreadySubmitted`) are raised before any provider delegation. They
//!   are caller-ordering bugs, not recoverable conditions.
//! - **Provider failures** pass through the transparent [`Wallet`] variant
//!   unmodified, exactly as the provider produced them.
//!
//! Neither family changes the transaction's `status` or `error` slot —
//! transitioning to `Errored` is an explicit action left to the caller.
//!
//! [`Wallet`]: LifecycleError::Wallet

use thiserror::Error;

use crate::wallet::WalletError;

/// Errors returned by [`Transaction::pay_to_addresses`],
/// [`Transaction::sign`] and [`Transaction::submit`].
///
/// [`Transaction::pay_to_addresses`]: crate::Transaction::pay_to_addresses
/// [`Transaction::sign`]: crate::Transaction::sign
/// [`Transaction::submit`]: crate::Transaction::submit
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// `sign()` was called on a transaction that is already signed.
    #[error("transaction was already signed")]
    AlreadySigned,

    /// `submit()` was called before a successful `sign()`.
    #[error("must sign transaction before submitting")]
    NotSigned,

    /// `submit()` was called after a submission already produced a hash.
    #[error("transaction was already submitted")]
    AlreadySubmitted,

    /// The delegated provider operation failed. Propagated unmodified.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_messages() {
        assert_eq!(
            LifecycleError::AlreadySigned.to_string(),
            "transaction was already signed"
        );
        assert_eq!(
            LifecycleError::NotSigned.to_string(),
            "must sign transaction before submitting"
        );
        assert_eq!(
            LifecycleError::AlreadySubmitted.to_string(),
            "transaction was already submitted"
        );
    }

    #[test]
    fn wallet_failures_pass_through_display() {
        let e = LifecycleError::from(WalletError::Submission("node unreachable".into()));
        assert_eq!(e.to_string(), "submission failed: node unreachable");
    }
}
