use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIGURATION STORAGE
// ============================================================================

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Admin)
}

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn get_payment_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::PaymentToken)
}

pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&StorageKey::PaymentToken, token);
}

pub fn get_fee_rate(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&StorageKey::FeeRateBps)
        .unwrap_or(0)
}

pub fn set_fee_rate(e: &Env, rate_bps: u32) {
    e.storage().instance().set(&StorageKey::FeeRateBps, &rate_bps);
}

// ============================================================================
// AUCTION RECORDS
// ============================================================================

/// Assign the next sequential auction id. The first listing gets id 1.
pub fn next_auction_id(e: &Env) -> u64 {
    let counter = e
        .storage()
        .instance()
        .get::<_, u64>(&StorageKey::AuctionCounter)
        .unwrap_or(0)
        + 1;
    e.storage()
        .instance()
        .set(&StorageKey::AuctionCounter, &counter);
    counter
}

pub fn get_auction(e: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(e: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.auction_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

/// Take the transfer lock. Returns false if an outbound transfer is already
/// in flight, i.e. the caller re-entered through a transfer hook.
pub fn acquire_transfer_lock(e: &Env) -> bool {
    if e.storage().instance().has(&StorageKey::TransferLock) {
        return false;
    }
    e.storage().instance().set(&StorageKey::TransferLock, &true);
    true
}

pub fn release_transfer_lock(e: &Env) {
    e.storage().instance().remove(&StorageKey::TransferLock);
}

// ============================================================================
// TTL MANAGEMENT
// ============================================================================

/// Extend the TTL of instance storage.
/// Called internally during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
