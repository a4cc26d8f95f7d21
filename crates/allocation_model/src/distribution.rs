//! Distributable supply, claim and unsold formulas
//!
//! Every formula here is a pure function of the sale totals. The engine
//! calls these at read time; nothing is memoized per wallet.

use crate::math::*;

/// Supply-side parameters of a sale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyParams {
    /// Full project-token supply reserved for the sale (smallest units)
    pub max_tokens: u128,
    /// Raise level (payment smallest units) at which the full supply is distributed
    pub min_raise_for_max: u128,
}

/// Tokens that will be distributed across all claimants
///
/// Over-subscribed sales distribute the full supply. Under-subscribed sales
/// distribute `total_raised * max_tokens / min_raise_for_max`, floored.
pub fn tokens_to_distribute(p: &SupplyParams, total_raised: u128) -> Option<u128> {
    if total_raised > p.min_raise_for_max {
        return Some(p.max_tokens);
    }
    mul_div_floor(total_raised, p.max_tokens, p.min_raise_for_max)
}

/// A wallet's share of the distributable supply
///
/// `allocation * distributable / total_allocation`, floored, so the sum
/// over all wallets never exceeds `distributable`.
pub fn expected_claim(allocation: u128, total_allocation: u128, distributable: u128) -> Option<u128> {
    if total_allocation == 0 {
        return Some(0);
    }
    mul_div_floor(allocation, distributable, total_allocation)
}

/// Supply not spoken for by the sale
pub fn unsold_tokens(p: &SupplyParams, distributable: u128) -> u128 {
    sub_floor_u128(p.max_tokens, distributable)
}

/// Supply still owed by custody: everything not yet claimed or burned
pub fn reserved_tokens(p: &SupplyParams, total_claimed: u128, total_burned: u128) -> u128 {
    sub_floor_u128(sub_floor_u128(p.max_tokens, total_claimed), total_burned)
}
