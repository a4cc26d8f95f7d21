//! Checked arithmetic helpers - no unwrap, no panics, no as casts
//! Overflow is reported as `None`, never saturated

/// Add u128, `None` on overflow
pub fn add_u128(a: u128, b: u128) -> Option<u128> {
    a.checked_add(b)
}

/// Subtract u128 with floor at 0
pub fn sub_floor_u128(a: u128, b: u128) -> u128 {
    a.saturating_sub(b)
}

/// Compute `a * b / d` with a single floor rounding
///
/// Returns `None` if `d == 0` or the intermediate product overflows.
pub fn mul_div_floor(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    a.checked_mul(b).map(|product| product / d)
}
