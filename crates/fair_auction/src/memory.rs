//! In-memory collaborators for simulation and tests

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::TransferError;
use crate::ports::{Address, Clock, PaymentRail, TokenLedger};

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: i64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.get()
    }
}

/// Payment-asset balances keyed by account
#[derive(Debug, Default)]
pub struct InMemoryRail {
    balances: HashMap<Address, u128>,
    fail_next: bool,
}

impl InMemoryRail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund(&mut self, who: &Address, amount: u128) {
        let balance = self.balances.entry(*who).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn balance_of(&self, who: &Address) -> u128 {
        self.balances.get(who).copied().unwrap_or(0)
    }

    /// Make the next `forward` fail without moving funds
    pub fn fail_next_forward(&mut self) {
        self.fail_next = true;
    }
}

impl PaymentRail for InMemoryRail {
    fn forward(&mut self, from: &Address, to: &Address, amount: u128) -> Result<(), TransferError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(TransferError::Rejected("injected forwarding failure".to_string()));
        }

        let available = self.balance_of(from);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        self.balances.insert(*from, available - amount);
        self.fund(to, amount);
        Ok(())
    }
}

/// Project-token balances with a single custody account that transfers debit
#[derive(Debug)]
pub struct InMemoryLedger {
    custody: Address,
    balances: HashMap<Address, u128>,
    fail_next: bool,
}

impl InMemoryLedger {
    pub fn new(custody: Address) -> Self {
        Self {
            custody,
            balances: HashMap::new(),
            fail_next: false,
        }
    }

    pub fn mint(&mut self, to: &Address, amount: u128) {
        let balance = self.balances.entry(*to).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Make the next `transfer` fail without moving tokens
    pub fn fail_next_transfer(&mut self) {
        self.fail_next = true;
    }
}

impl TokenLedger for InMemoryLedger {
    fn custody(&self) -> &Address {
        &self.custody
    }

    fn balance_of(&self, owner: &Address) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn transfer(&mut self, to: &Address, amount: u128) -> Result<(), TransferError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(TransferError::Rejected("injected transfer failure".to_string()));
        }

        let custody = self.custody;
        let available = self.balance_of(&custody);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        self.balances.insert(custody, available - amount);
        self.mint(to, amount);
        Ok(())
    }
}
