use soroban_sdk::contracterror;

/// Error codes for the auction engine.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the platform administrator
    Unauthorized = 3,
    /// No auction record under the given id
    AuctionNotFound = 4,
    /// Listing parameters violate a creation precondition
    InvalidListing = 5,
    /// Asset ledger rejected the custody transfer at creation
    OwnershipTransferFailed = 6,
    /// Auction has ended or its close time has passed
    AuctionClosed = 7,
    /// Bid is below the minimum acceptance threshold
    BidTooLow = 8,
    /// Sellers may not bid on their own listing
    SelfBidForbidden = 9,
    /// Refund of the displaced leader was rejected
    RefundFailed = 10,
    /// Pulling the new bid into escrow was rejected
    BidEscrowFailed = 11,
    /// Settlement attempted before the close time
    AuctionStillOpen = 12,
    /// Auction already went through its terminal transition
    AlreadySettled = 13,
    /// Asset ledger rejected releasing the asset from custody
    AssetReturnFailed = 14,
    /// Token rejected a settlement payout
    FundsTransferFailed = 15,
    /// Fee rate above the 1000 bps cap
    FeeRateTooHigh = 16,
    /// Re-entered while an outbound transfer was in flight
    ReentrantCall = 17,
    /// Amount arithmetic overflowed
    AmountOverflow = 18,
    /// Listings with bids cannot be withdrawn
    CannotCancelWithBids = 19,
}
