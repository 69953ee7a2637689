//! Core value types shared between the transaction core and wallet providers.
//!
//! These are deliberately small and serde-friendly: every one of them crosses
//! the boundary to a provider implementation, and most of them end up in
//! host-application persistence or UI state at some point.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TransactionStatus
// ---------------------------------------------------------------------------

/// Lifecycle phase of a transaction.
///
/// The intended progression is a forward pipeline:
///
/// ```text
/// Building -> Signing -> Submitting -> Submitted
///      \________\____________\______-> Errored
/// ```
///
/// `Submitted` is the terminal success state; `Errored` is the terminal
/// failure state, reachable from any phase. The state machine does not
/// enforce this ordering — status is driven explicitly by the owner or the
/// wallet provider, and listeners observe whatever was set. The pipeline
/// shape is a documented contract between collaborators, not a hard
/// invariant of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Payments are being assembled; nothing has been signed yet.
    Building,
    /// A signature is being produced by the wallet provider.
    Signing,
    /// The signed transaction is being broadcast to the network.
    Submitting,
    /// The network accepted the transaction. Terminal success.
    Submitted,
    /// Something went wrong. Terminal failure, set explicitly by the
    /// owner or provider — never by the core itself.
    Errored,
}

impl TransactionStatus {
    /// Returns `true` for the two terminal phases, `Submitted` and
    /// `Errored`. This is the predicate behind
    /// [`Transaction::on_finally`](crate::Transaction::on_finally).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted | Self::Errored)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Building => write!(f, "Building"),
            Self::Signing => write!(f, "Signing"),
            Self::Submitting => write!(f, "Submitting"),
            Self::Submitted => write!(f, "Submitted"),
            Self::Errored => write!(f, "Errored"),
        }
    }
}

// ---------------------------------------------------------------------------
// AddressType
// ---------------------------------------------------------------------------

/// Classification of a destination address.
///
/// Providers use this to pick the right output construction for a payment;
/// the core never branches on it. Which class a given address string falls
/// into is chain-specific knowledge that lives entirely in the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// A script/contract address.
    Contract,
    /// A standard payment address with a staking component.
    Base,
    /// A payment-only address with no staking component.
    Enterprise,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contract => write!(f, "Contract"),
            Self::Base => write!(f, "Base"),
            Self::Enterprise => write!(f, "Enterprise"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

/// An instruction to send value to a destination address.
///
/// The core treats payments as opaque records: it hands them to the wallet
/// provider for validation and output construction, and on success stores
/// them on the transaction in the exact order the caller supplied. `amount`
/// is an integer in the smallest on-chain unit — no floating point anywhere
/// near money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Destination address, in whatever encoding the provider's chain uses.
    pub address: String,
    /// Value to send, in the smallest indivisible unit.
    pub amount: u64,
    /// Optional address classification, when the caller already knows it.
    /// Providers are free to classify the address themselves when `None`.
    pub address_type: Option<AddressType>,
}

impl Payment {
    /// Creates a payment with no address classification.
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
            address_type: None,
        }
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.amount, self.address)
    }
}

// ---------------------------------------------------------------------------
// TransactionFailure
// ---------------------------------------------------------------------------

/// Opaque failure detail attached to a transaction's `error` slot.
///
/// The lifecycle methods never write this; it exists for the owner or the
/// provider to record what went wrong before (or after) setting the status
/// to [`TransactionStatus::Errored`], so that `on_error` listeners can
/// surface it. The `data` payload is provider-defined and uninterpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFailure {
    /// Human-readable description of the failure.
    pub message: String,
    /// Open provider-defined detail (error codes, chain diagnostics, ...).
    #[serde(default)]
    pub data: serde_json::Value,
}

impl TransactionFailure {
    /// Creates a failure with a message and no structured detail.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }

    /// Attaches structured detail to the failure.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

impl fmt::Display for TransactionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(TransactionStatus::Building.to_string(), "Building");
        assert_eq!(TransactionStatus::Errored.to_string(), "Errored");
    }

    #[test]
    fn status_terminal_predicate() {
        assert!(TransactionStatus::Submitted.is_terminal());
        assert!(TransactionStatus::Errored.is_terminal());
        assert!(!TransactionStatus::Building.is_terminal());
        assert!(!TransactionStatus::Signing.is_terminal());
        assert!(!TransactionStatus::Submitting.is_terminal());
    }

    #[test]
    fn address_type_display() {
        assert_eq!(AddressType::Contract.to_string(), "Contract");
        assert_eq!(AddressType::Base.to_string(), "Base");
        assert_eq!(AddressType::Enterprise.to_string(), "Enterprise");
    }

    #[test]
    fn status_serde_roundtrip() {
        let statuses = [
            TransactionStatus::Building,
            TransactionStatus::Signing,
            TransactionStatus::Submitting,
            TransactionStatus::Submitted,
            TransactionStatus::Errored,
        ];
        for s in statuses {
            let json = serde_json::to_string(&s).unwrap();
            let recovered: TransactionStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(s, recovered);
        }
    }

    #[test]
    fn payment_display() {
        let p = Payment::new("addr1_alice", 2_000_000);
        assert_eq!(p.to_string(), "2000000 -> addr1_alice");
    }

    #[test]
    fn payment_serde_roundtrip() {
        let p = Payment {
            address: "addr1qxy...".to_string(),
            amount: 2_500_000,
            address_type: Some(AddressType::Base),
        };
        let json = serde_json::to_string(&p).unwrap();
        let recovered: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(p, recovered);
    }

    #[test]
    fn failure_defaults_to_null_data() {
        let f = TransactionFailure::new("utxo selection failed");
        assert_eq!(f.message, "utxo selection failed");
        assert!(f.data.is_null());
    }

    #[test]
    fn failure_with_data() {
        let f = TransactionFailure::new("rejected")
            .with_data(serde_json::json!({ "code": 400 }));
        assert_eq!(f.data["code"], 400);
    }
}
