//! Events recorded by committed operations

use crate::ports::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionEvent {
    Contributed {
        wallet: Address,
        amount: u128,
        total_raised: u128,
    },
    Claimed {
        wallet: Address,
        amount: u128,
    },
    UnsoldBurned {
        amount: u128,
    },
    EmergencyWithdrawn {
        to: Address,
        amount: u128,
    },
}
