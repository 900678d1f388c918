//! Bid ledger: the winner slot plus the pull-based refund balances.
//!
//! Outbid and losing value is never pushed back on the spot. It is credited to
//! the bidder's refund balance and leaves the contract only through
//! `withdraw` or the paged settlement flush, so a recipient that rejects
//! transfers cannot block bidding.

use crate::errors::Error;
use crate::storage;
use crate::types::AuctionState;
use soroban_sdk::{Address, Env};

pub fn credit(env: &Env, bidder: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }
    let balance = storage::get_refund(env, bidder)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    storage::set_refund(env, bidder, balance);
    Ok(())
}

pub fn debit(env: &Env, bidder: &Address, amount: i128) -> Result<(), Error> {
    let balance = storage::get_refund(env, bidder);
    if balance < amount {
        return Err(Error::InsufficientValue);
    }
    storage::set_refund(env, bidder, balance - amount);
    Ok(())
}

/// Empties a bidder's refund balance and returns what it held.
pub fn take(env: &Env, bidder: &Address) -> i128 {
    let balance = storage::get_refund(env, bidder);
    if balance > 0 {
        storage::set_refund(env, bidder, 0);
    }
    balance
}

/// Installs a new winner locking `value`. The previous winner's locked value
/// moves to their refund balance.
pub fn replace_winner(
    env: &Env,
    state: &mut AuctionState,
    bidder: &Address,
    value: i128,
) -> Result<(), Error> {
    if let Some(previous) = state.winner.take() {
        credit(env, &previous, state.current_value)?;
    }
    state.winner = Some(bidder.clone());
    state.current_value = value;
    Ok(())
}

/// Marks the auction as bid on once a bidder other than the seller gets in.
/// The flag never clears, even when that bidder later withdraws.
pub fn note_bidder(state: &mut AuctionState, bidder: &Address, seller: &Address) {
    if bidder != seller {
        state.outside_bids = true;
    }
}

pub fn total_refunds(env: &Env) -> i128 {
    (0..storage::depositor_count(env))
        .filter_map(|index| storage::get_depositor(env, index))
        .map(|bidder| storage::get_refund(env, &bidder))
        .fold(0i128, |total, amount| total.saturating_add(amount))
}
