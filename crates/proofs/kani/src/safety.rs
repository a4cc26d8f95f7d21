//! Kani safety proofs for the distribution formulas

use kani::assume;
use allocation_model::{distribution::*, helpers::*};
use crate::generators::*;

/// Distributable supply never exceeds the reserved supply
#[kani::proof]
fn distribution_capped_by_supply() {
    let p = any_supply();
    let raised = any_raise();

    let distributable = tokens_to_distribute(&p, raised);
    kani::assert(distributable.is_some(), "bounded inputs never overflow");
    if let Some(d) = distributable {
        kani::assert(d <= p.max_tokens, "distributable must not exceed supply");
        kani::assert(unsold_tokens(&p, d) + d == p.max_tokens, "unsold + distributable == supply");
    }
}

/// Full supply once the raise passes the threshold
#[kani::proof]
fn over_subscription_distributes_everything() {
    let p = any_supply();
    let raised = any_raise();
    assume(raised > p.min_raise_for_max);

    kani::assert(tokens_to_distribute(&p, raised) == Some(p.max_tokens), "over-subscribed sale distributes full supply");
}

/// More raised never distributes less
#[kani::proof]
fn distribution_monotone_in_raise() {
    let p = any_supply();
    let a = any_raise();
    let b = any_raise();
    assume(a <= b);

    let da = tokens_to_distribute(&p, a);
    let db = tokens_to_distribute(&p, b);
    kani::assert(da <= db, "distribution must be monotone in total raised");
}

/// Floored claims never over-allocate
#[kani::proof]
#[kani::unwind(4)]
fn claims_never_exceed_distribution() {
    let p = any_supply();
    let allocations = any_allocations();

    kani::assert(claims_bounded(&p, &allocations), "sum of claims must not exceed distributable supply");
}

/// A sole contributor receives the whole distributable supply
#[kani::proof]
fn sole_contributor_claims_everything() {
    let p = any_supply();
    let raised = any_raise();
    assume(raised > 0);

    if let Some(d) = tokens_to_distribute(&p, raised) {
        kani::assert(expected_claim(raised, raised, d) == Some(d), "sole contributor claims all");
    }
}
