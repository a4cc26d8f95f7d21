//! Sale parameters and mutable accounting state

use allocation_model::SupplyParams;

use crate::error::AuctionError;
use crate::ports::Address;

/// Immutable sale parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionParameters {
    /// Project token being sold
    pub project_token: Address,
    /// Payment asset accepted for contributions
    pub payment_asset: Address,
    /// Unix seconds; the sale opens strictly after this instant
    pub start_time: i64,
    /// Unix seconds; the sale closes strictly after this instant
    pub end_time: i64,
    /// Receives every contribution as it is made
    pub treasury: Address,
    /// Full project-token supply reserved for the sale (smallest units)
    pub max_project_tokens_to_distribute: u128,
    /// Raise level at which the full supply is distributed
    pub min_raise_for_max_distribution: u128,
    /// Hard cap on the sum of all contributions
    pub max_raise_amount: u128,
    /// Hard cap on any single wallet's cumulative contribution
    pub cap_per_wallet: u128,
}

impl AuctionParameters {
    /// Reject parameters the engine cannot run safely
    ///
    /// Bounding `max_raise_amount * max_project_tokens_to_distribute` bounds
    /// every claim and distribution product, since no allocation or total
    /// can exceed `max_raise_amount`.
    pub fn validate(&self) -> Result<(), AuctionError> {
        if self.end_time <= self.start_time {
            return Err(AuctionError::InvalidSaleWindow);
        }
        if self.min_raise_for_max_distribution == 0 {
            return Err(AuctionError::ZeroMinRaise);
        }
        if self
            .max_raise_amount
            .checked_mul(self.max_project_tokens_to_distribute)
            .is_none()
        {
            return Err(AuctionError::ParameterOverflow);
        }
        Ok(())
    }

    pub fn supply(&self) -> SupplyParams {
        SupplyParams {
            max_tokens: self.max_project_tokens_to_distribute,
            min_raise_for_max: self.min_raise_for_max_distribution,
        }
    }
}

/// Sale-wide totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuctionState {
    /// Sum of accepted contributions
    pub total_raised: u128,
    /// Sum of wallet allocations (1:1 with payment, always == total_raised)
    pub total_allocation: u128,
    /// Project tokens paid out by claims
    pub total_claimed: u128,
    /// Project tokens sent to the burn sink
    pub total_burned: u128,
    pub has_burned_unsold: bool,
}

/// Per-wallet record, created on first contribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub allocation: u128,
    pub has_claimed: bool,
}

/// Phase of the sale derived from the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Pending,
    Open,
    Ended,
}
