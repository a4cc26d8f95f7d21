//! Error types

use thiserror::Error;

/// Failure reported by a payment rail or token ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: u128, requested: u128 },

    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Every way an auction operation can be refused
///
/// A returned error always means the operation had no effect on engine
/// state or on the collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    // Construction
    #[error("sale window is empty: end time must be after start time")]
    InvalidSaleWindow,
    #[error("minimum raise for max distribution must be non-zero")]
    ZeroMinRaise,
    #[error("max raise times max distributable tokens overflows u128")]
    ParameterOverflow,

    // Contribution
    #[error("sale has not started")]
    SaleNotStarted,
    #[error("sale has ended")]
    SaleEnded,
    #[error("contribution amount must be non-zero")]
    ZeroAmount,
    #[error("contribution exceeds the max raise amount")]
    MaxRaiseExceeded,
    #[error("contribution exceeds the per-wallet cap")]
    WalletCapExceeded,
    #[error("payment forwarding failed")]
    PaymentForwardingFailed(#[source] TransferError),
    #[error("direct payments are not accepted, contribute instead")]
    DirectPaymentRejected,

    // Settlement
    #[error("sale has not ended")]
    SaleNotEnded,
    #[error("wallet has already claimed")]
    AlreadyClaimed,
    #[error("wallet has no allocation to claim")]
    NothingToClaim,
    #[error("project token transfer failed")]
    TokenTransferFailed(#[source] TransferError),
    #[error("caller is not the auction owner")]
    NotAuthorized,
    #[error("unsold tokens have already been burned")]
    AlreadyBurned,

    #[error("math overflow")]
    MathOverflow,
}
