
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use crate::types::AssetRef;
use crate::{AuctionContract, AuctionContractClient};

pub const ASSET_ID: u32 = 7;
pub const FEE_RATE_BPS: u32 = 250;

/// In-memory stand-in for the external asset ledger. Tracks one owner per
/// asset id and can be frozen to simulate a ledger that rejects transfers.
#[contract]
pub struct MockAssetLedger;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    NotOwner = 1,
    Frozen = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum MockKey {
    Owner(u32),
    Frozen(u32),
}

#[contractimpl]
impl MockAssetLedger {
    pub fn mint(env: Env, to: Address, asset_id: u32) {
        env.storage().instance().set(&MockKey::Owner(asset_id), &to);
    }

    pub fn set_frozen(env: Env, asset_id: u32, frozen: bool) {
        env.storage()
            .instance()
            .set(&MockKey::Frozen(asset_id), &frozen);
    }

    pub fn owner_of(env: Env, asset_id: u32) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Owner(asset_id))
            .unwrap()
    }

    pub fn transfer_ownership(env: Env, from: Address, to: Address, asset_id: u32) {
        if env
            .storage()
            .instance()
            .get::<_, bool>(&MockKey::Frozen(asset_id))
            .unwrap_or(false)
        {
            panic_with_error!(&env, LedgerError::Frozen);
        }
        let owner: Address = env
            .storage()
            .instance()
            .get(&MockKey::Owner(asset_id))
            .unwrap();
        if owner != from {
            panic_with_error!(&env, LedgerError::NotOwner);
        }
        env.storage().instance().set(&MockKey::Owner(asset_id), &to);
    }
}

/// Minimal payment token covering the slice of the token interface the
/// engine calls. Individual accounts can be frozen so that transfers to or
/// from them are rejected, which the Stellar Asset Contract fixture cannot
/// express without AUTH_REVOCABLE.
#[contract]
pub struct MockPaymentToken;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AccountFrozen = 1,
    InsufficientBalance = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum TokenKey {
    Balance(Address),
    Frozen(Address),
}

fn token_balance(env: &Env, addr: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&TokenKey::Balance(addr.clone()))
        .unwrap_or(0)
}

fn token_frozen(env: &Env, addr: &Address) -> bool {
    env.storage()
        .instance()
        .get(&TokenKey::Frozen(addr.clone()))
        .unwrap_or(false)
}

#[contractimpl]
impl MockPaymentToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = token_balance(&env, &to);
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(balance + amount));
    }

    pub fn set_frozen(env: Env, addr: Address, frozen: bool) {
        env.storage().instance().set(&TokenKey::Frozen(addr), &frozen);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        token_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if token_frozen(&env, &from) || token_frozen(&env, &to) {
            panic_with_error!(&env, TokenError::AccountFrozen);
        }
        let from_balance = token_balance(&env, &from);
        if from_balance < amount {
            panic_with_error!(&env, TokenError::InsufficientBalance);
        }
        let to_balance = token_balance(&env, &to);
        env.storage()
            .instance()
            .set(&TokenKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(to_balance + amount));
    }
}

pub struct Setup {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub admin: Address,
    pub seller: Address,
    pub alice: Address,
    pub bob: Address,
    pub ledger: MockAssetLedgerClient<'static>,
    pub token: token::TokenClient<'static>,
    pub asset: AssetRef,
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
    token_admin_client.mint(&alice, &1_000_000);
    token_admin_client.mint(&bob, &1_000_000);

    let ledger_id = env.register(MockAssetLedger, ());
    let ledger = MockAssetLedgerClient::new(&env, &ledger_id);
    ledger.mint(&seller, &ASSET_ID);

    client.initialize(&admin, &token_address, &FEE_RATE_BPS);

    let asset = AssetRef {
        contract: ledger_id,
        asset_id: ASSET_ID,
    };

    Setup {
        env,
        client,
        admin,
        seller,
        alice,
        bob,
        ledger,
        token,
        asset,
    }
}

/// Like `setup_test`, but with the freezable mock payment token so tests
/// can make individual value transfers fail.
pub fn setup_with_mock_token() -> (Setup, MockPaymentTokenClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_id = env.register(MockPaymentToken, ());
    let mock_token = MockPaymentTokenClient::new(&env, &token_id);
    mock_token.mint(&alice, &1_000_000);
    mock_token.mint(&bob, &1_000_000);

    let ledger_id = env.register(MockAssetLedger, ());
    let ledger = MockAssetLedgerClient::new(&env, &ledger_id);
    ledger.mint(&seller, &ASSET_ID);

    client.initialize(&admin, &token_id, &FEE_RATE_BPS);

    let asset = AssetRef {
        contract: ledger_id,
        asset_id: ASSET_ID,
    };
    let token = token::TokenClient::new(&env, &token_id);

    (
        Setup {
            env,
            client,
            admin,
            seller,
            alice,
            bob,
            ledger,
            token,
            asset,
        },
        mock_token,
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}
