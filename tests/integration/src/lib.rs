//! Fair Auction Integration Tests
//!
//! Simulated end-to-end runs of the auction engine against in-memory
//! collaborators. `Harness` wires a fresh engine with funded wallets and a
//! custody account pre-minted with the sale supply.

use fair_auction::memory::{InMemoryLedger, InMemoryRail, ManualClock};
use fair_auction::{Address, AuctionEngine, AuctionParameters};

pub const E18: u128 = 1_000_000_000_000_000_000;

pub const OWNER: Address = [0xA0; 32];
pub const CUSTODY: Address = [0xA1; 32];
pub const TREASURY: Address = [0xA2; 32];

pub type SimEngine = AuctionEngine<InMemoryRail, InMemoryLedger, ManualClock>;

/// Deterministic wallet address for index `i`
pub fn wallet(i: u8) -> Address {
    let mut address = [0u8; 32];
    address[0] = 0x57;
    address[31] = i;
    address
}

/// Parameters of the reference fair launch: 10-second window starting at `start`
pub fn reference_params(start: i64) -> AuctionParameters {
    AuctionParameters {
        project_token: [0x70; 32],
        payment_asset: [0xEE; 32],
        start_time: start,
        end_time: start + 10,
        treasury: TREASURY,
        max_project_tokens_to_distribute: 19_999_999_999_999,
        min_raise_for_max_distribution: E18,
        max_raise_amount: 2 * E18,
        cap_per_wallet: 2 * E18,
    }
}

/// Engine with `wallets` funded participants; the clock starts at `start_time`
pub fn harness(params: AuctionParameters, wallets: u8, funding: u128) -> SimEngine {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rail = InMemoryRail::new();
    for i in 0..wallets {
        rail.fund(&wallet(i), funding);
    }

    let mut ledger = InMemoryLedger::new(CUSTODY);
    ledger.mint(&CUSTODY, params.max_project_tokens_to_distribute);

    let clock = ManualClock::new(params.start_time);
    match AuctionEngine::new(params, OWNER, rail, ledger, clock) {
        Ok(engine) => engine,
        Err(e) => panic!("harness parameters rejected: {}", e),
    }
}
