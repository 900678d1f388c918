pub mod dutch_test;

use crate::{AuctionConfig, AuctionContract, AuctionContractClient, AuctionKind, Visibility};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env,
};

pub const TON: i128 = 1_000_000_000;
pub const DIME: i128 = TON / 10;
pub const START: u64 = 1_000;
pub const INITIAL_BALANCE: i128 = 10_000 * TON;

// ========== NAMING RECORD STAND-IN ==========

#[contracttype]
#[derive(Clone)]
enum RecordKey {
    Owner,
    Locked,
}

/// Minimal naming record: one owner, handed over by the owner. A locked
/// record rejects every handoff.
#[contract]
pub struct MockNameRecord;

#[contractimpl]
impl MockNameRecord {
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&RecordKey::Owner, &owner);
    }

    pub fn owner(env: Env) -> Address {
        env.storage().instance().get(&RecordKey::Owner).unwrap()
    }

    pub fn change_owner(env: Env, new_owner: Address) {
        let owner: Address = env.storage().instance().get(&RecordKey::Owner).unwrap();
        owner.require_auth();
        let locked: bool = env
            .storage()
            .instance()
            .get(&RecordKey::Locked)
            .unwrap_or(false);
        if locked {
            panic!("record is locked");
        }
        env.storage().instance().set(&RecordKey::Owner, &new_owner);
    }

    pub fn set_locked(env: Env, locked: bool) {
        env.storage().instance().set(&RecordKey::Locked, &locked);
    }
}

// ========== FIXTURE ==========

pub struct Setup {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub auction: Address,
    pub seller: Address,
    pub escrow: Address,
    pub fee_collector: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub record: MockNameRecordClient<'static>,
}

impl Setup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START);

        let auction = env.register(AuctionContract, ());
        let client = AuctionContractClient::new(&env, &auction);

        let seller = Address::generate(&env);
        let escrow = Address::generate(&env);
        let fee_collector = Address::generate(&env);

        let token_issuer = Address::generate(&env);
        let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
        let token = token::TokenClient::new(&env, &token_contract.address());
        let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

        let record_id = env.register(MockNameRecord, (seller.clone(),));
        let record = MockNameRecordClient::new(&env, &record_id);

        Setup {
            env,
            client,
            auction,
            seller,
            escrow,
            fee_collector,
            token,
            token_admin,
            record,
        }
    }

    /// Open English auction: 1 TON minimum and step, buy-now at 6 TON,
    /// 5 % escrow commission, 0.5 TON protocol fee, 170 s of bidding.
    pub fn english_config(&self) -> AuctionConfig {
        AuctionConfig {
            seller: self.seller.clone(),
            buyer: None,
            asset: self.record.address.clone(),
            payment_token: self.token.address.clone(),
            kind: AuctionKind::EnglishForward,
            visibility: Visibility::Open,
            escrow: self.escrow.clone(),
            escrow_bps: 500,
            fee_collector: self.fee_collector.clone(),
            fee_value: 5 * DIME,
            min_bid: TON,
            min_price_step: TON,
            buy_now_price: 6 * TON,
            start_time: START,
            end_time: START + 170,
            reveal_end_time: 0,
            dutch_cycle: 0,
        }
    }

    pub fn blind_config(&self) -> AuctionConfig {
        AuctionConfig {
            kind: AuctionKind::EnglishBlind,
            buy_now_price: 0,
            end_time: START + 100,
            reveal_end_time: START + 200,
            ..self.english_config()
        }
    }

    /// Starts at 10 TON, drops 1 TON every 10 s, never below 4 TON.
    pub fn dutch_config(&self) -> AuctionConfig {
        AuctionConfig {
            kind: AuctionKind::DutchForward,
            min_bid: 10 * TON,
            min_price_step: TON,
            buy_now_price: 4 * TON,
            end_time: START + 1_000,
            dutch_cycle: 10,
            ..self.english_config()
        }
    }

    /// Initialize, hand the record to the auction and confirm receipt.
    pub fn launch(&self, config: &AuctionConfig) {
        self.client.initialize(config);
        self.record.change_owner(&self.auction);
        self.client.receive_asset(&self.seller);
    }

    pub fn bidder(&self) -> Address {
        let bidder = Address::generate(&self.env);
        self.token_admin.mint(&bidder, &INITIAL_BALANCE);
        bidder
    }

    pub fn salt(&self, byte: u8) -> BytesN<32> {
        BytesN::from_array(&self.env, &[byte; 32])
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn held_by_auction(&self) -> i128 {
        self.token.balance(&self.auction)
    }
}
