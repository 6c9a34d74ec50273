use soroban_sdk::Env;

use crate::errors::Error;
use crate::escrow;
use crate::events::{AuctionCancelled, AuctionSettled};
use crate::storage;
use crate::types::{Auction, BPS_DENOMINATOR};

/// Platform fee owed on a winning bid, truncated toward the platform.
pub fn calculate_fee(amount: i128, fee_rate_bps: u32) -> Result<i128, Error> {
    let fee = amount
        .checked_mul(fee_rate_bps as i128)
        .ok_or(Error::AmountOverflow)?
        / BPS_DENOMINATOR;
    Ok(fee)
}

/// Execute the terminal transfers for an auction whose lifecycle flags are
/// already committed, and emit the settlement outcome.
///
/// Reserve met: asset goes to the winner and the bid, minus the fee, goes to
/// the seller. The fee remainder simply stays on the contract account.
/// Reserve not met or no bids: asset returns to the seller and the leading
/// bid, if any, is refunded in full.
pub fn execute(e: &Env, auction: &Auction) -> Result<(), Error> {
    let token = storage::get_payment_token(e).ok_or(Error::NotInitialized)?;

    match &auction.highest_bidder {
        Some(winner) if auction.highest_bid >= auction.reserve_price => {
            let fee = calculate_fee(auction.highest_bid, storage::get_fee_rate(e))?;
            let proceeds = auction.highest_bid - fee;

            if !escrow::release_asset(e, &auction.asset, winner) {
                return Err(Error::AssetReturnFailed);
            }
            if !escrow::pay_out(e, &token, &auction.seller, proceeds) {
                return Err(Error::FundsTransferFailed);
            }

            AuctionSettled {
                auction_id: auction.auction_id,
                winner: winner.clone(),
                amount: auction.highest_bid,
            }
            .publish(e);
        }
        leader => {
            if !escrow::release_asset(e, &auction.asset, &auction.seller) {
                return Err(Error::AssetReturnFailed);
            }
            if let Some(bidder) = leader {
                if !escrow::refund_bid(e, &token, bidder, auction.highest_bid) {
                    return Err(Error::FundsTransferFailed);
                }
            }

            AuctionCancelled {
                auction_id: auction.auction_id,
            }
            .publish(e);
        }
    }

    Ok(())
}
