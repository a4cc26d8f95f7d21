//! Invariant checking helpers

use crate::distribution::*;
use crate::math::*;

/// Totals equal each other and the sum of per-wallet allocations
pub fn conservation_ok(total_raised: u128, total_allocation: u128, allocations: &[u128]) -> bool {
    let sum = allocations
        .iter()
        .try_fold(0u128, |acc, a| add_u128(acc, *a));
    match sum {
        Some(sum) => sum == total_raised && sum == total_allocation,
        None => false,
    }
}

/// No wallet above its cap and the raise within the hard cap
pub fn caps_ok(allocations: &[u128], cap_per_wallet: u128, total_raised: u128, max_raise: u128) -> bool {
    total_raised <= max_raise && allocations.iter().all(|a| *a <= cap_per_wallet)
}

/// Sum of all expected claims never exceeds the distributable supply
pub fn claims_bounded(p: &SupplyParams, allocations: &[u128]) -> bool {
    let total = match allocations.iter().try_fold(0u128, |acc, a| add_u128(acc, *a)) {
        Some(t) => t,
        None => return false,
    };
    let distributable = match tokens_to_distribute(p, total) {
        Some(d) => d,
        None => return false,
    };
    let claimed = allocations.iter().try_fold(0u128, |acc, a| {
        expected_claim(*a, total, distributable).and_then(|c| add_u128(acc, c))
    });
    match claimed {
        Some(sum) => sum <= distributable,
        None => false,
    }
}
