use soroban_sdk::Address;

use crate::errors::Error;
use crate::types::{Auction, BPS_DENOMINATOR, MIN_INCREMENT_BPS};

/// Smallest amount the next bid must reach.
///
/// The first bid has to meet the starting price. Every later bid must top
/// the current leader by at least 5%, rounded up so the increment is never
/// shortened by integer truncation.
pub fn min_acceptable_bid(auction: &Auction) -> Result<i128, Error> {
    if auction.highest_bid == 0 {
        return Ok(auction.starting_price);
    }
    let scaled = auction
        .highest_bid
        .checked_mul(BPS_DENOMINATOR + MIN_INCREMENT_BPS)
        .ok_or(Error::AmountOverflow)?
        .checked_add(BPS_DENOMINATOR - 1)
        .ok_or(Error::AmountOverflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

/// Decide whether `bidder` may take the lead with `amount` at time `now`.
/// Pure check, touches no state.
pub fn validate_bid(
    auction: &Auction,
    bidder: &Address,
    amount: i128,
    now: u64,
) -> Result<(), Error> {
    if auction.ended || auction.settled || now >= auction.end_time {
        return Err(Error::AuctionClosed);
    }
    if *bidder == auction.seller {
        return Err(Error::SelfBidForbidden);
    }
    if amount < min_acceptable_bid(auction)? {
        return Err(Error::BidTooLow);
    }
    Ok(())
}
