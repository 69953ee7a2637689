//! # txflow — Observable Transaction Lifecycle
//!
//! A small state machine for one blockchain transaction being assembled,
//! signed, and submitted through a pluggable wallet provider.
//!
//! The [`Transaction`] tracks its phase (`Building` → `Signing` →
//! `Submitting` → `Submitted`, with `Errored` reachable from anywhere),
//! guards re-entry into sign/submit, collects an ordered payment list, and
//! notifies registered listeners synchronously on every status change.
//! Everything chain-specific — address handling, key custody, signing,
//! broadcast — lives behind the [`WalletProvider`] capability.
//!
//! ## Architecture
//!
//! ```text
//! types.rs       — TransactionStatus, AddressType, Payment, TransactionFailure
//! wallet.rs      — WalletProvider capability trait and WalletError
//! error.rs       — LifecycleError for the three lifecycle operations
//! transaction.rs — The Transaction state machine and listener dispatch
//! ```
//!
//! ## Design Decisions
//!
//! - The lifecycle operations never set `status` themselves. Phase is
//!   driven explicitly by the owner or provider; the settled fields
//!   (`payments`, `is_signed`, `hash`) record what actually succeeded.
//!   The two concerns move independently on purpose.
//! - Listener dispatch is synchronous, unconditional, and in registration
//!   order. Phase filtering happens inside the listener, which is how the
//!   `on_*` helpers are built.
//! - Failures propagate to the immediate caller unmodified. The core never
//!   retries, never swallows, and never transitions to `Errored` on its
//!   own — that assignment is the owner's explicit call.
//! - Runtime-agnostic: provider operations are `async` but the core spawns
//!   nothing, locks nothing, and imposes no timeouts.

#![warn(missing_docs)]

pub mod error;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use error::LifecycleError;
pub use transaction::Transaction;
pub use types::{AddressType, Payment, TransactionFailure, TransactionStatus};
pub use wallet::{WalletError, WalletProvider};
