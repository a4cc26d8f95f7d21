//! Generators for arbitrary sale inputs (for Kani)

#[cfg(kani)]
use kani::any;
use allocation_model::SupplyParams;

// Ultra-small bounds for fast SAT solving
pub const MAX_TOKENS: u128 = 1_000;
pub const MAX_RAISE: u128 = 1_000;
pub const N_WALLETS: usize = 3;

/// Clamp raw supply inputs into the verified range, min raise never zero
pub fn bounded_supply(max_tokens: u128, min_raise: u128) -> SupplyParams {
    SupplyParams {
        max_tokens: max_tokens % (MAX_TOKENS + 1),
        min_raise_for_max: (min_raise % MAX_RAISE) + 1,
    }
}

#[cfg(kani)]
pub fn any_supply() -> SupplyParams {
    let tokens_raw: u16 = any();
    let min_raise_raw: u16 = any();
    bounded_supply(u128::from(tokens_raw), u128::from(min_raise_raw))
}

#[cfg(kani)]
pub fn any_raise() -> u128 {
    let raw: u16 = any();
    u128::from(raw) % (2 * MAX_RAISE + 1)
}

#[cfg(kani)]
pub fn any_allocations() -> [u128; N_WALLETS] {
    let a: u8 = any();
    let b: u8 = any();
    let c: u8 = any();
    [u128::from(a), u128::from(b), u128::from(c)]
}
