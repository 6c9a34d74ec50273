use soroban_sdk::{contracttype, Address};

/// Reference to a non-fungible asset held by an external ledger contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    /// Ledger contract that records ownership of the asset
    pub contract: Address,
    /// Identifier of the asset within that ledger
    pub asset_id: u32,
}

/// A single listing. Created once, mutated by accepted bids, closed exactly
/// once by settlement or cancellation, then retained forever for audit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub seller: Address,
    pub asset: AssetRef,
    pub starting_price: i128,
    pub reserve_price: i128,
    pub end_time: u64,
    /// 0 until the first bid is accepted
    pub highest_bid: i128,
    /// None exactly when `highest_bid` is 0
    pub highest_bidder: Option<Address>,
    pub ended: bool,
    pub settled: bool,
}

/// Storage keys for the auction engine.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Platform administrator address
    Admin,
    /// Token all bids are denominated in
    PaymentToken,
    /// Platform fee rate in basis points
    FeeRateBps,
    /// Last assigned auction id
    AuctionCounter,
    /// Auction record by id
    Auction(u64),
    /// Held while an outbound transfer is in flight
    TransferLock,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Shortest listing duration (1 hour)
pub const MIN_DURATION_SECS: u64 = 3_600;

/// Longest listing duration (30 days)
pub const MAX_DURATION_SECS: u64 = 30 * 86_400;

/// Required increment over the current leading bid, in basis points
pub const MIN_INCREMENT_BPS: i128 = 500;

/// Upper bound on the platform fee rate (10%)
pub const MAX_FEE_RATE_BPS: u32 = 1_000;

/// Basis point denominator
pub const BPS_DENOMINATOR: i128 = 10_000;
