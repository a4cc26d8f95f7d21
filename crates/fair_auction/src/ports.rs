//! External collaborators consumed by the engine

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TransferError;

/// Account identity (32-byte public key)
pub type Address = pinocchio::pubkey::Pubkey;

/// Canonical non-recoverable sink for burned project tokens
pub const BURN_SINK: Address = pinocchio_pubkey::pubkey!("1nc1nerator11111111111111111111111111111111");

/// Render an address as base58 for logs and configuration
pub fn to_base58(address: &Address) -> String {
    bs58::encode(address).into_string()
}

/// Moves the native payment asset between accounts
pub trait PaymentRail {
    fn forward(&mut self, from: &Address, to: &Address, amount: u128) -> Result<(), TransferError>;
}

/// Project token ledger as seen from the engine's custody account
///
/// `transfer` always debits the account returned by `custody`.
pub trait TokenLedger {
    /// Account this ledger debits on `transfer`
    fn custody(&self) -> &Address;

    fn balance_of(&self, owner: &Address) -> u128;

    fn transfer(&mut self, to: &Address, amount: u128) -> Result<(), TransferError>;

    fn custody_balance(&self) -> u128 {
        self.balance_of(self.custody())
    }
}

/// Source of the current Unix time in seconds
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}
