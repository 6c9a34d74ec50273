use soroban_sdk::{token, Address, Env};

use crate::asset::AssetLedgerClient;
use crate::errors::Error;
use crate::types::AssetRef;

/// Move the listed asset from the seller into contract custody.
pub fn take_asset_custody(e: &Env, asset: &AssetRef, seller: &Address) -> Result<(), Error> {
    let ledger = AssetLedgerClient::new(e, &asset.contract);
    let custody = e.current_contract_address();
    if ledger
        .try_transfer_ownership(seller, &custody, &asset.asset_id)
        .is_err()
    {
        return Err(Error::OwnershipTransferFailed);
    }
    Ok(())
}

/// Release the asset from custody to `to`. Returns false if the ledger
/// rejects the transfer.
pub fn release_asset(e: &Env, asset: &AssetRef, to: &Address) -> bool {
    let ledger = AssetLedgerClient::new(e, &asset.contract);
    let custody = e.current_contract_address();
    ledger
        .try_transfer_ownership(&custody, to, &asset.asset_id)
        .is_ok()
}

/// Pull an accepted bid from the bidder into contract custody.
pub fn collect_bid(e: &Env, token: &Address, bidder: &Address, amount: i128) -> bool {
    let client = token::TokenClient::new(e, token);
    client
        .try_transfer(bidder, &e.current_contract_address(), &amount)
        .is_ok()
}

/// Pay escrowed value out of custody.
pub fn pay_out(e: &Env, token: &Address, to: &Address, amount: i128) -> bool {
    let client = token::TokenClient::new(e, token);
    client
        .try_transfer(&e.current_contract_address(), to, &amount)
        .is_ok()
}

/// Return a displaced leader exactly what they had bid.
pub fn refund_bid(e: &Env, token: &Address, bidder: &Address, amount: i128) -> bool {
    pay_out(e, token, bidder, amount)
}
