//! Allocation and claim accounting engine
//!
//! Lifecycle:
//! - Pending until `now > start_time`, Open until `now > end_time`, then Ended
//! - Open: `contribute` converts payment 1:1 into allocation and forwards the
//!   payment to the treasury in the same operation
//! - Ended: each wallet claims `allocation * tokens_to_distribute / total_allocation`
//!   exactly once; the owner burns `max - tokens_to_distribute` exactly once
//!
//! Every operation validates first, then calls the collaborator, then commits.
//! A failed collaborator call leaves the engine untouched.

use std::collections::HashMap;

use allocation_model::{distribution, math};

use crate::error::AuctionError;
use crate::events::AuctionEvent;
use crate::ports::{to_base58, Address, Clock, PaymentRail, TokenLedger, BURN_SINK};
use crate::state::{AuctionParameters, AuctionState, SaleStatus, UserInfo};

/// Return `$err` (logged at debug) unless `$cond` holds
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err(rejected($err));
        }
    };
}

fn rejected(err: AuctionError) -> AuctionError {
    log::debug!("Rejected: {}", err);
    err
}

pub struct AuctionEngine<R, L, C> {
    params: AuctionParameters,
    owner: Address,
    state: AuctionState,
    users: HashMap<Address, UserInfo>,
    events: Vec<AuctionEvent>,
    rail: R,
    ledger: L,
    clock: C,
}

impl<R: PaymentRail, L: TokenLedger, C: Clock> AuctionEngine<R, L, C> {
    pub fn new(
        params: AuctionParameters,
        owner: Address,
        rail: R,
        ledger: L,
        clock: C,
    ) -> Result<Self, AuctionError> {
        params.validate()?;

        log::info!(
            "Auction created: window ({}, {}], supply {}, min raise {}, max raise {}, cap per wallet {}",
            params.start_time,
            params.end_time,
            params.max_project_tokens_to_distribute,
            params.min_raise_for_max_distribution,
            params.max_raise_amount,
            params.cap_per_wallet
        );

        Ok(Self {
            params,
            owner,
            state: AuctionState::default(),
            users: HashMap::new(),
            events: Vec::new(),
            rail,
            ledger,
            clock,
        })
    }

    pub fn params(&self) -> &AuctionParameters {
        &self.params
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// Engine's own account on the token ledger
    pub fn custody(&self) -> &Address {
        self.ledger.custody()
    }

    pub fn state(&self) -> &AuctionState {
        &self.state
    }

    pub fn events(&self) -> &[AuctionEvent] {
        &self.events
    }

    pub fn rail(&self) -> &R {
        &self.rail
    }

    pub fn rail_mut(&mut self) -> &mut R {
        &mut self.rail
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ------------------------------------------------------------------
    // Time predicates
    // ------------------------------------------------------------------

    pub fn has_started(&self) -> bool {
        self.clock.now() > self.params.start_time
    }

    pub fn has_ended(&self) -> bool {
        self.clock.now() > self.params.end_time
    }

    /// Seconds until the sale closes, 0 once `end_time` is reached
    pub fn remaining_time(&self) -> u64 {
        let remaining = self.params.end_time.saturating_sub(self.clock.now());
        u64::try_from(remaining).unwrap_or(0)
    }

    pub fn status(&self) -> SaleStatus {
        if !self.has_started() {
            SaleStatus::Pending
        } else if !self.has_ended() {
            SaleStatus::Open
        } else {
            SaleStatus::Ended
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn total_raised(&self) -> u128 {
        self.state.total_raised
    }

    pub fn total_allocation(&self) -> u128 {
        self.state.total_allocation
    }

    /// Wallet record; wallets that never contributed read as the zero record
    pub fn user_info(&self, wallet: &Address) -> UserInfo {
        self.users.get(wallet).copied().unwrap_or_default()
    }

    pub fn wallets(&self) -> impl Iterator<Item = (&Address, &UserInfo)> + '_ {
        self.users.iter()
    }

    /// Project tokens owed to claimants at the current subscription level
    pub fn tokens_to_distribute(&self) -> Result<u128, AuctionError> {
        distribution::tokens_to_distribute(&self.params.supply(), self.state.total_raised)
            .ok_or(AuctionError::MathOverflow)
    }

    /// Claim the wallet would receive if totals stopped changing now
    pub fn expected_claim_amount(&self, wallet: &Address) -> Result<u128, AuctionError> {
        let distributable = self.tokens_to_distribute()?;
        distribution::expected_claim(
            self.user_info(wallet).allocation,
            self.state.total_allocation,
            distributable,
        )
        .ok_or(AuctionError::MathOverflow)
    }

    pub fn unsold_tokens(&self) -> Result<u128, AuctionError> {
        let distributable = self.tokens_to_distribute()?;
        Ok(distribution::unsold_tokens(&self.params.supply(), distributable))
    }

    /// Project tokens custody must keep: the supply not yet claimed or burned
    pub fn reserved_tokens(&self) -> u128 {
        distribution::reserved_tokens(
            &self.params.supply(),
            self.state.total_claimed,
            self.state.total_burned,
        )
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Accept `amount` of payment from `wallet` and credit it as allocation
    pub fn contribute(&mut self, wallet: &Address, amount: u128) -> Result<(), AuctionError> {
        require!(self.has_started(), AuctionError::SaleNotStarted);
        require!(!self.has_ended(), AuctionError::SaleEnded);
        require!(amount > 0, AuctionError::ZeroAmount);

        let total_raised = math::add_u128(self.state.total_raised, amount)
            .filter(|total| *total <= self.params.max_raise_amount)
            .ok_or_else(|| rejected(AuctionError::MaxRaiseExceeded))?;

        let allocation = math::add_u128(self.user_info(wallet).allocation, amount)
            .filter(|allocation| *allocation <= self.params.cap_per_wallet)
            .ok_or_else(|| rejected(AuctionError::WalletCapExceeded))?;

        let total_allocation = math::add_u128(self.state.total_allocation, amount)
            .ok_or(AuctionError::MathOverflow)?;

        let treasury = self.params.treasury;
        self.rail.forward(wallet, &treasury, amount).map_err(|e| {
            log::warn!("Payment forwarding from {} failed: {}", to_base58(wallet), e);
            AuctionError::PaymentForwardingFailed(e)
        })?;

        self.users.entry(*wallet).or_default().allocation = allocation;
        self.state.total_raised = total_raised;
        self.state.total_allocation = total_allocation;

        log::info!(
            "Contribution: wallet {} amount {} allocation {} total raised {}",
            to_base58(wallet),
            amount,
            allocation,
            total_raised
        );
        self.events.push(AuctionEvent::Contributed {
            wallet: *wallet,
            amount,
            total_raised,
        });

        Ok(())
    }

    /// Refuse payment sent outside `contribute`
    pub fn receive_direct_payment(&self, from: &Address, amount: u128) -> Result<(), AuctionError> {
        log::warn!(
            "Refused direct payment of {} from {}",
            amount,
            to_base58(from)
        );
        Err(AuctionError::DirectPaymentRejected)
    }

    /// Pay out the wallet's share once the sale has ended
    ///
    /// Wallets that never contributed are refused with `NothingToClaim`
    /// rather than recorded as claimed. Returns the amount transferred.
    pub fn claim(&mut self, wallet: &Address) -> Result<u128, AuctionError> {
        require!(self.has_ended(), AuctionError::SaleNotEnded);

        let info = self.user_info(wallet);
        require!(!info.has_claimed, AuctionError::AlreadyClaimed);
        require!(info.allocation > 0, AuctionError::NothingToClaim);

        let amount = self.expected_claim_amount(wallet)?;
        let total_claimed = math::add_u128(self.state.total_claimed, amount)
            .ok_or(AuctionError::MathOverflow)?;

        self.ledger.transfer(wallet, amount).map_err(|e| {
            log::warn!("Claim transfer to {} failed: {}", to_base58(wallet), e);
            AuctionError::TokenTransferFailed(e)
        })?;

        self.users.entry(*wallet).or_default().has_claimed = true;
        self.state.total_claimed = total_claimed;

        log::info!("Claim: wallet {} amount {}", to_base58(wallet), amount);
        self.events.push(AuctionEvent::Claimed {
            wallet: *wallet,
            amount,
        });

        Ok(amount)
    }

    /// Send the supply the sale did not spend to the burn sink (owner only, once)
    ///
    /// Returns the amount burned.
    pub fn burn_unsold_tokens(&mut self, caller: &Address) -> Result<u128, AuctionError> {
        require!(*caller == self.owner, AuctionError::NotAuthorized);
        require!(self.has_ended(), AuctionError::SaleNotEnded);
        require!(!self.state.has_burned_unsold, AuctionError::AlreadyBurned);

        let unsold = self.unsold_tokens()?;
        let total_burned = math::add_u128(self.state.total_burned, unsold)
            .ok_or(AuctionError::MathOverflow)?;

        self.ledger.transfer(&BURN_SINK, unsold).map_err(|e| {
            log::warn!("Burn of {} unsold tokens failed: {}", unsold, e);
            AuctionError::TokenTransferFailed(e)
        })?;

        self.state.has_burned_unsold = true;
        self.state.total_burned = total_burned;

        log::info!("Burned {} unsold tokens", unsold);
        self.events.push(AuctionEvent::UnsoldBurned { amount: unsold });

        Ok(unsold)
    }

    /// Recover project tokens held beyond what the sale still owes (owner only)
    ///
    /// The reserve is everything not yet claimed or burned, so vested but
    /// unclaimed allocations are never touched. The payment asset is never
    /// held by the engine and needs no recovery. Returns the amount moved to
    /// the owner.
    pub fn emergency_withdraw_funds(&mut self, caller: &Address) -> Result<u128, AuctionError> {
        require!(*caller == self.owner, AuctionError::NotAuthorized);

        let balance = self.ledger.custody_balance();
        let surplus = math::sub_floor_u128(balance, self.reserved_tokens());
        if surplus == 0 {
            log::info!("Emergency withdrawal: no surplus above reserve {}", self.reserved_tokens());
            return Ok(0);
        }

        let owner = self.owner;
        self.ledger.transfer(&owner, surplus).map_err(|e| {
            log::warn!("Emergency withdrawal of {} failed: {}", surplus, e);
            AuctionError::TokenTransferFailed(e)
        })?;

        log::info!(
            "Emergency withdrawal: {} tokens to {}",
            surplus,
            to_base58(&owner)
        );
        self.events.push(AuctionEvent::EmergencyWithdrawn {
            to: owner,
            amount: surplus,
        });

        Ok(surplus)
    }
}
