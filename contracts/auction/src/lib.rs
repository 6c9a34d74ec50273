#![no_std]

mod admin;
mod asset;
mod bidding;
mod errors;
mod escrow;
mod events;
mod settlement;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use crate::errors::Error;

use crate::asset::AssetLedgerClient;
use crate::events::{AuctionCancelled, BidAccepted, FeeRateUpdated, Initialized, ListingCreated};
use crate::types::{AssetRef, Auction, MAX_DURATION_SECS, MAX_FEE_RATE_BPS, MIN_DURATION_SECS};

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// Initialize the engine with its administrator, the token bids are
    /// denominated in, and the platform fee rate in basis points.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        fee_rate_bps: u32,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if fee_rate_bps > MAX_FEE_RATE_BPS {
            return Err(Error::FeeRateTooHigh);
        }

        storage::set_admin(&env, &admin);
        storage::set_payment_token(&env, &payment_token);
        storage::set_fee_rate(&env, fee_rate_bps);
        storage::extend_instance_ttl(&env);

        Initialized {
            admin,
            payment_token,
            fee_rate_bps,
        }
        .publish(&env);

        Ok(())
    }

    /// Open a listing. The asset moves into contract custody first; only
    /// then is the auction record created, so a rejected custody transfer
    /// creates nothing.
    pub fn create_auction(
        env: Env,
        seller: Address,
        asset: AssetRef,
        starting_price: i128,
        reserve_price: i128,
        duration_seconds: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }

        if starting_price <= 0
            || reserve_price < starting_price
            || duration_seconds < MIN_DURATION_SECS
            || duration_seconds > MAX_DURATION_SECS
        {
            return Err(Error::InvalidListing);
        }

        // The seller must presently own the asset on its ledger.
        let ledger = AssetLedgerClient::new(&env, &asset.contract);
        match ledger.try_owner_of(&asset.asset_id) {
            Ok(Ok(owner)) if owner == seller => {}
            _ => return Err(Error::InvalidListing),
        }

        let end_time = env
            .ledger()
            .timestamp()
            .checked_add(duration_seconds)
            .ok_or(Error::AmountOverflow)?;

        if !storage::acquire_transfer_lock(&env) {
            return Err(Error::ReentrantCall);
        }
        escrow::take_asset_custody(&env, &asset, &seller)?;
        storage::release_transfer_lock(&env);

        let auction_id = storage::next_auction_id(&env);

        let auction = Auction {
            auction_id,
            seller: seller.clone(),
            asset: asset.clone(),
            starting_price,
            reserve_price,
            end_time,
            highest_bid: 0,
            highest_bidder: None,
            ended: false,
            settled: false,
        };

        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        ListingCreated {
            auction_id,
            seller,
            asset,
            starting_price,
            reserve_price,
            end_time,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Compete for the lead. The displaced leader is refunded in full and
    /// the new amount is pulled into escrow before the call returns; any
    /// rejected transfer aborts the whole bid and leaves the record as it
    /// was.
    pub fn place_bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        bidding::validate_bid(&auction, &bidder, amount, now)?;

        let token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        let displaced = auction.highest_bidder.clone();
        let displaced_amount = auction.highest_bid;

        // Effects before interactions: the record already names the new
        // leader when the refund and escrow transfers run.
        auction.highest_bidder = Some(bidder.clone());
        auction.highest_bid = amount;
        storage::save_auction(&env, &auction);

        if !storage::acquire_transfer_lock(&env) {
            return Err(Error::ReentrantCall);
        }
        if let Some(previous) = displaced {
            if !escrow::refund_bid(&env, &token, &previous, displaced_amount) {
                return Err(Error::RefundFailed);
            }
        }
        if !escrow::collect_bid(&env, &token, &bidder, amount) {
            return Err(Error::BidEscrowFailed);
        }
        storage::release_transfer_lock(&env);
        storage::extend_instance_ttl(&env);

        BidAccepted {
            auction_id,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// The auction's single terminal transition; callable by anyone once
    /// the close time has passed. Lifecycle flags are committed before any
    /// transfer so a reentrant observer already sees the auction as closed.
    pub fn settle_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.settled {
            return Err(Error::AlreadySettled);
        }
        if env.ledger().timestamp() < auction.end_time && !auction.ended {
            return Err(Error::AuctionStillOpen);
        }

        auction.ended = true;
        auction.settled = true;
        storage::save_auction(&env, &auction);

        if !storage::acquire_transfer_lock(&env) {
            return Err(Error::ReentrantCall);
        }
        settlement::execute(&env, &auction)?;
        storage::release_transfer_lock(&env);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    /// Withdraw a listing that has attracted no bids. The asset leaves
    /// custody and the record becomes terminal.
    pub fn cancel_auction(env: Env, auction_id: u64, seller: Address) -> Result<(), Error> {
        seller.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.seller != seller {
            return Err(Error::Unauthorized);
        }
        if auction.settled {
            return Err(Error::AlreadySettled);
        }
        if auction.highest_bidder.is_some() {
            return Err(Error::CannotCancelWithBids);
        }

        auction.ended = true;
        auction.settled = true;
        storage::save_auction(&env, &auction);

        if !storage::acquire_transfer_lock(&env) {
            return Err(Error::ReentrantCall);
        }
        if !escrow::release_asset(&env, &auction.asset, &auction.seller) {
            return Err(Error::AssetReturnFailed);
        }
        storage::release_transfer_lock(&env);
        storage::extend_instance_ttl(&env);

        AuctionCancelled { auction_id }.publish(&env);

        Ok(())
    }

    /// Update the platform fee rate (administrator only, capped at 10%).
    pub fn set_fee_rate(env: Env, caller: Address, new_rate_bps: u32) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;

        if new_rate_bps > MAX_FEE_RATE_BPS {
            return Err(Error::FeeRateTooHigh);
        }

        storage::set_fee_rate(&env, new_rate_bps);
        storage::extend_instance_ttl(&env);

        FeeRateUpdated {
            admin: caller,
            new_rate_bps,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_fee_rate(env: Env) -> Result<u32, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_fee_rate(&env))
    }
}
