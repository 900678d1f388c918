use crate::types::{AuctionConfig, AuctionState, Bid, DataKey, Phase, RevealedBid};
use soroban_sdk::{Address, BytesN, Env, IntoVal, Val, Vec};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn set_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Config ==========

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<AuctionConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ========== State ==========

pub fn get_state(env: &Env) -> AuctionState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or(AuctionState {
            phase: Phase::Created,
            winner: None,
            current_value: 0,
            settled: false,
            asset_pending: None,
            outside_bids: false,
            refund_cursor: 0,
        })
}

pub fn set_state(env: &Env, state: &AuctionState) {
    env.storage().instance().set(&DataKey::State, state);
}

// ========== Refunds ==========

pub fn get_refund(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::Refund(bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

/// Writes a bidder's refund balance, registering the bidder in the depositor
/// index the first time it is seen. A zero balance removes the entry.
pub fn set_refund(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::Refund(bidder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    let seen = DataKey::DepositorSeen(bidder.clone());
    if !env.storage().persistent().has(&seen) {
        let index = depositor_count(env);
        set_persistent(env, &DataKey::Depositor(index), bidder);
        set_persistent(env, &DataKey::DepositorCount, &(index + 1));
        set_persistent(env, &seen, &true);
    }
    set_persistent(env, &key, &amount);
}

pub fn depositor_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::DepositorCount)
        .unwrap_or(0)
}

pub fn get_depositor(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Depositor(index))
}

// ========== Commitments ==========

pub fn get_commitment(env: &Env, bidder: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::Commitment(bidder.clone()))
}

pub fn set_commitment(env: &Env, bidder: &Address, commitment: &BytesN<32>) {
    set_persistent(env, &DataKey::Commitment(bidder.clone()), commitment);
}

pub fn remove_commitment(env: &Env, bidder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Commitment(bidder.clone()));
}

// ========== History ==========

// One entry per record plus a counter, so appending never reloads the list.

pub fn get_bid_history(env: &Env) -> Vec<Bid> {
    let count: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::BidCount)
        .unwrap_or(0);
    let mut history = Vec::new(env);
    for index in 0..count {
        if let Some(bid) = env.storage().persistent().get(&DataKey::Bid(index)) {
            history.push_back(bid);
        }
    }
    history
}

pub fn add_bid_to_history(env: &Env, bid: Bid) {
    let index: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::BidCount)
        .unwrap_or(0);
    set_persistent(env, &DataKey::Bid(index), &bid);
    set_persistent(env, &DataKey::BidCount, &(index + 1));
}

pub fn get_revealed_bids(env: &Env) -> Vec<RevealedBid> {
    let count: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::RevealedCount)
        .unwrap_or(0);
    let mut revealed_bids = Vec::new(env);
    for index in 0..count {
        if let Some(revealed) = env.storage().persistent().get(&DataKey::Revealed(index)) {
            revealed_bids.push_back(revealed);
        }
    }
    revealed_bids
}

pub fn add_revealed_bid(env: &Env, revealed: RevealedBid) {
    let index: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::RevealedCount)
        .unwrap_or(0);
    set_persistent(env, &DataKey::Revealed(index), &revealed);
    set_persistent(env, &DataKey::RevealedCount, &(index + 1));
}
