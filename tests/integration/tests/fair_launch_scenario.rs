//! Reference fair-launch lifecycle
//!
//! One wallet buys 0.3 units in a sale that needs 1 unit for full
//! distribution, then claims after the window closes; the owner burns the
//! remaining 70% of the supply.

use fair_auction::memory::ManualClock;
use fair_auction::{AuctionError, AuctionEvent, SaleStatus, TokenLedger, BURN_SINK};
use fair_auction_integration_tests::*;

const START: i64 = 1_700_000_000;

#[test]
fn test_reference_lifecycle() {
    let mut engine = harness(reference_params(START), 2, 10 * E18);
    let buyer = wallet(0);
    let outsider = wallet(1);

    // Deployed at the start block: nothing open, nothing to distribute
    assert!(!engine.has_started());
    assert!(!engine.has_ended());
    assert_eq!(engine.status(), SaleStatus::Pending);
    assert_eq!(engine.tokens_to_distribute(), Ok(0));

    // Plain transfers are refused
    assert_eq!(
        engine.receive_direct_payment(&buyer, E18),
        Err(AuctionError::DirectPaymentRejected)
    );

    engine.clock().advance(1);
    assert_eq!(engine.status(), SaleStatus::Open);

    // Above either cap: refused whole
    let max_raise = engine.params().max_raise_amount;
    assert_eq!(engine.contribute(&buyer, max_raise + 1), Err(AuctionError::MaxRaiseExceeded));
    let cap = engine.params().cap_per_wallet;
    assert_eq!(engine.contribute(&buyer, cap + 1), Err(AuctionError::MaxRaiseExceeded));
    assert_eq!(engine.total_raised(), 0);

    // 0.3 units
    let amount = 3 * E18 / 10;
    let treasury_before = engine.rail().balance_of(&TREASURY);
    engine.contribute(&buyer, amount).unwrap();
    assert_eq!(engine.user_info(&buyer).allocation, amount);
    assert_eq!(engine.rail().balance_of(&TREASURY), treasury_before + amount);
    assert_eq!(engine.total_raised(), amount);
    assert_eq!(engine.total_allocation(), amount);

    // Under-subscribed: 0.3 of the supply, floored
    let params = engine.params().clone();
    let distributable =
        amount * params.max_project_tokens_to_distribute / params.min_raise_for_max_distribution;
    assert_eq!(distributable, 5_999_999_999_999);
    assert_eq!(engine.tokens_to_distribute(), Ok(distributable));

    // Same result as the two-branch formula integrators tend to write
    let two_branch = if engine.total_raised() > params.min_raise_for_max_distribution {
        amount * params.max_project_tokens_to_distribute / engine.total_allocation()
    } else {
        amount
            * (engine.total_raised() * params.max_project_tokens_to_distribute
                / params.min_raise_for_max_distribution)
            / engine.total_allocation()
    };
    let expected_claim = engine.expected_claim_amount(&buyer).unwrap();
    assert_eq!(expected_claim, two_branch);
    assert_eq!(expected_claim, distributable);

    // Claim has to wait for the window to close
    assert_eq!(engine.claim(&buyer), Err(AuctionError::SaleNotEnded));
    let remaining = engine.remaining_time();
    assert_eq!(remaining, 9);
    engine.clock().advance(remaining as i64 + 1);
    assert!(engine.has_ended());

    assert_eq!(engine.claim(&buyer), Ok(expected_claim));
    assert_eq!(engine.ledger().balance_of(&buyer), expected_claim);
    assert!(engine.user_info(&buyer).has_claimed);

    // Repeat claim fails and moves nothing
    assert_eq!(engine.claim(&buyer), Err(AuctionError::AlreadyClaimed));
    assert_eq!(engine.ledger().balance_of(&buyer), expected_claim);

    // Only the owner burns, and only once
    assert_eq!(engine.burn_unsold_tokens(&outsider), Err(AuctionError::NotAuthorized));
    let burn_amount = params.max_project_tokens_to_distribute - engine.tokens_to_distribute().unwrap();
    assert_eq!(engine.burn_unsold_tokens(&OWNER), Ok(burn_amount));
    assert_eq!(engine.ledger().balance_of(&BURN_SINK), burn_amount);
    assert_eq!(engine.burn_unsold_tokens(&OWNER), Err(AuctionError::AlreadyBurned));

    // Custody fully settled
    assert_eq!(engine.ledger().balance_of(&CUSTODY), 0);
    assert_eq!(engine.emergency_withdraw_funds(&OWNER), Ok(0));

    assert_eq!(
        engine.events(),
        &[
            AuctionEvent::Contributed { wallet: buyer, amount, total_raised: amount },
            AuctionEvent::Claimed { wallet: buyer, amount: expected_claim },
            AuctionEvent::UnsoldBurned { amount: burn_amount },
        ]
    );
}

#[test]
fn test_over_subscribed_lifecycle() {
    let mut engine = harness(reference_params(START), 4, 10 * E18);
    engine.clock().advance(1);

    // 0.5 + 0.5 + 0.5 + 0.25 = 1.75 units, past the 1-unit threshold
    for i in 0..3 {
        engine.contribute(&wallet(i), E18 / 2).unwrap();
    }
    engine.contribute(&wallet(3), E18 / 4).unwrap();

    let supply = engine.params().max_project_tokens_to_distribute;
    assert_eq!(engine.tokens_to_distribute(), Ok(supply));

    engine.clock().advance(10);
    let mut claimed = 0u128;
    for i in 0..4 {
        claimed += engine.claim(&wallet(i)).unwrap();
    }
    assert!(claimed <= supply);

    // Nothing unsold; the burn only latches the flag
    assert_eq!(engine.burn_unsold_tokens(&OWNER), Ok(0));
    assert_eq!(engine.ledger().balance_of(&BURN_SINK), 0);
    assert_eq!(engine.ledger().balance_of(&CUSTODY), supply - claimed);
}

#[test]
fn test_sale_with_no_contributions() {
    let mut engine = harness(reference_params(START), 1, E18);
    engine.clock().advance(20);

    assert_eq!(engine.claim(&wallet(0)), Err(AuctionError::NothingToClaim));

    let supply = engine.params().max_project_tokens_to_distribute;
    assert_eq!(engine.burn_unsold_tokens(&OWNER), Ok(supply));
    assert_eq!(engine.ledger().balance_of(&BURN_SINK), supply);
}

#[test]
fn test_emergency_withdraw_of_excess_supply() {
    let mut engine = harness(reference_params(START), 1, E18);
    // Custody over-minted by mistake
    engine.ledger_mut().mint(&CUSTODY, 1_000);

    assert_eq!(engine.emergency_withdraw_funds(&wallet(0)), Err(AuctionError::NotAuthorized));
    assert_eq!(engine.emergency_withdraw_funds(&OWNER), Ok(1_000));
    assert_eq!(engine.ledger().balance_of(&OWNER), 1_000);

    // Sale still fully funded afterwards
    engine.clock().advance(1);
    engine.contribute(&wallet(0), E18).unwrap();
    engine.clock().advance(10);
    let supply = engine.params().max_project_tokens_to_distribute;
    assert_eq!(engine.claim(&wallet(0)), Ok(supply));
}

#[test]
fn test_engine_on_manual_clock_type() {
    // The harness clock is interior-mutable so queries see advances immediately
    let engine = harness(reference_params(START), 0, 0);
    let clock: &ManualClock = engine.clock();
    clock.set(START + 10);
    assert_eq!(engine.remaining_time(), 0);
    assert!(!engine.has_ended());
}
