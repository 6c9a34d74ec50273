use soroban_sdk::{contractevent, Address};

use crate::types::AssetRef;

/// Event emitted when the engine is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
    pub fee_rate_bps: u32,
}

/// Event emitted when a listing opens and the asset enters custody
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCreated {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub asset: AssetRef,
    pub starting_price: i128,
    pub reserve_price: i128,
    pub end_time: u64,
}

/// Event emitted when a bid takes the lead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidAccepted {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when a sale settles with the reserve met
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

/// Event emitted when a listing closes without a sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelled {
    #[topic]
    pub auction_id: u64,
}

/// Event emitted when the platform fee rate changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdated {
    #[topic]
    pub admin: Address,
    pub new_rate_bps: u32,
}
