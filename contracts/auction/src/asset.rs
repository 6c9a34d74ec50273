use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external ledger that records non-fungible asset
/// ownership. The engine only ever reads the current owner and moves
/// ownership in or out of its own custody account.
// Nothing implements the trait on-chain; it exists to generate the client.
#[allow(dead_code)]
#[contractclient(name = "AssetLedgerClient")]
pub trait AssetLedger {
    /// Current owner of `asset_id`.
    fn owner_of(env: Env, asset_id: u32) -> Address;

    /// Move `asset_id` from `from` to `to`. Traps if `from` is not the
    /// current owner or the ledger otherwise rejects the transfer.
    fn transfer_ownership(env: Env, from: Address, to: Address, asset_id: u32);
}
