#![no_std]

//! # Name Auction
//!
//! Sells one naming record through an English, blind (commit-reveal) or Dutch
//! auction, open to anyone, to anyone but the seller, or to a single
//! designated buyer.
//!
//! Bids are paid in the configured payment token and held by the contract.
//! Outbid value is credited to a per-bidder refund balance instead of being
//! sent back immediately; it leaves through [`AuctionContract::withdraw`] or
//! the flush performed by [`AuctionContract::finalize`].
//!
//! `finalize` settles exactly once. Repeated calls on a closed auction return
//! [`Outcome::AlreadyTerminal`] without moving value or the record.

mod asset;
mod clock;
mod commitment;
mod errors;
mod events;
mod ledger;
mod pricing;
mod settlement;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, Vec};

pub use asset::{NameRecordClient, NameRecordInterface};
pub use errors::Error;
pub use types::{
    AuctionConfig, AuctionInfo, AuctionKind, AuctionState, Bid, Outcome, Phase, RevealedBid,
    Visibility,
};

use events::{
    AssetReceivedEventData, AuctionCancelledEventData, BidPlacedEventData, BidRevealedEventData,
    BlindBidCommittedEventData, RefundWithdrawnEventData,
};

const MAX_BPS: u32 = 10_000;

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========== INITIALIZATION ==========

    /// Store the auction parameters. Called once by the auction manager right
    /// after deployment, in the same transaction; the seller must authorize.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - a configuration is already stored
    /// * `Error::InvalidConfig` - the parameters are inconsistent
    pub fn initialize(env: Env, config: AuctionConfig) -> Result<(), Error> {
        config.seller.require_auth();
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        validate_config(&config)?;

        storage::set_config(&env, &config);
        let mut state = storage::get_state(&env);
        state.phase = Phase::AwaitingAsset;
        storage::set_state(&env, &state);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Seller confirms the record has been transferred to this contract.
    ///
    /// # Errors
    /// * `Error::UnauthorizedCaller` - caller is not the seller
    /// * `Error::PhaseViolation` - not waiting for the asset
    /// * `Error::AssetNotReceived` - the record is still owned by someone else
    pub fn receive_asset(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = load_config(&env)?;
        require_seller(&config, &caller)?;

        let mut state = storage::get_state(&env);
        if state.phase != Phase::AwaitingAsset {
            return Err(Error::PhaseViolation);
        }

        let owner = NameRecordClient::new(&env, &config.asset).owner();
        if owner != env.current_contract_address() {
            return Err(Error::AssetNotReceived);
        }

        state.phase = Phase::Active;
        storage::set_state(&env, &state);
        storage::extend_instance_ttl(&env);

        AssetReceivedEventData {
            seller: caller,
            asset: config.asset,
        }
        .publish(&env);

        Ok(())
    }

    // ========== BIDDING ==========

    /// Place a forward bid of `value`, paid from `bidder` into the auction.
    ///
    /// English: `value` must reach the current floor; the previous leader's
    /// value moves to their refund balance. Reaching the buy-now price ends
    /// bidding. Dutch: the first bid at or above the decayed price wins and
    /// pays that price; anything above it is refundable.
    ///
    /// Returns true when this bid closed the auction.
    ///
    /// # Errors
    /// * `Error::WrongAuctionKind` - blind auctions take `bid_blind`
    /// * `Error::PhaseViolation` - bidding is not open
    /// * `Error::UnauthorizedCaller` - visibility excludes `bidder`
    /// * `Error::InsufficientValue` - `value` is below the floor
    pub fn bid(env: Env, bidder: Address, value: i128) -> Result<bool, Error> {
        bidder.require_auth();
        let config = load_config(&env)?;
        let mut state = storage::get_state(&env);
        let now = env.ledger().timestamp();

        if !clock::is_accepting_bids(&config, &state, now) {
            return Err(Error::PhaseViolation);
        }
        require_eligible(&config, &bidder)?;

        if config.kind == AuctionKind::EnglishBlind {
            return Err(Error::WrongAuctionKind);
        }
        let required = pricing::required_price(&config, &state, now);
        if value < required {
            return Err(Error::InsufficientValue);
        }
        let (locked, excess, ends_auction) = match config.kind {
            AuctionKind::EnglishForward => (value, 0, pricing::hits_buy_now(&config, value)),
            AuctionKind::DutchForward => (required, value - required, true),
            AuctionKind::EnglishBlind => return Err(Error::WrongAuctionKind),
        };

        collect(&env, &config, &bidder, value);
        ledger::replace_winner(&env, &mut state, &bidder, locked)?;
        ledger::credit(&env, &bidder, excess)?;
        ledger::note_bidder(&mut state, &bidder, &config.seller);
        if ends_auction {
            state.phase = Phase::Ended;
        }

        storage::set_state(&env, &state);
        storage::add_bid_to_history(
            &env,
            Bid {
                bidder: bidder.clone(),
                amount: value,
                timestamp: now,
            },
        );
        storage::extend_instance_ttl(&env);

        BidPlacedEventData {
            bidder,
            amount: value,
            ends_auction,
        }
        .publish(&env);

        Ok(ends_auction)
    }

    /// Commit a sealed price for a blind auction, depositing `deposit`.
    ///
    /// A later commit from the same bidder replaces the hash; deposits add
    /// up. The deposit must cover the price revealed later.
    pub fn bid_blind(
        env: Env,
        bidder: Address,
        price_hash: BytesN<32>,
        deposit: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();
        let config = load_config(&env)?;
        let mut state = storage::get_state(&env);
        let now = env.ledger().timestamp();

        if config.kind != AuctionKind::EnglishBlind {
            return Err(Error::WrongAuctionKind);
        }
        if !clock::is_accepting_bids(&config, &state, now) {
            return Err(Error::PhaseViolation);
        }
        require_eligible(&config, &bidder)?;
        if deposit <= 0 {
            return Err(Error::InsufficientValue);
        }

        collect(&env, &config, &bidder, deposit);
        ledger::credit(&env, &bidder, deposit)?;
        ledger::note_bidder(&mut state, &bidder, &config.seller);
        storage::set_state(&env, &state);
        storage::set_commitment(&env, &bidder, &price_hash);
        storage::extend_instance_ttl(&env);

        BlindBidCommittedEventData {
            bidder,
            commitment: price_hash,
            deposit,
        }
        .publish(&env);

        Ok(())
    }

    /// Open a sealed bid during the reveal window.
    ///
    /// A mismatching (price, salt) pair leaves everything untouched; the
    /// deposit stays refundable. A matching reveal takes the lead only with a
    /// strictly higher price, so the earliest reveal wins a tie.
    ///
    /// # Errors
    /// * `Error::PhaseViolation` - outside the reveal window
    /// * `Error::RevealMismatch` - no commitment, or it does not match
    /// * `Error::InsufficientValue` - price under `min_bid` or above the deposit
    pub fn reveal_bid_blind(
        env: Env,
        bidder: Address,
        price: i128,
        salt: BytesN<32>,
    ) -> Result<bool, Error> {
        bidder.require_auth();
        let config = load_config(&env)?;
        let mut state = storage::get_state(&env);
        let now = env.ledger().timestamp();

        if config.kind != AuctionKind::EnglishBlind {
            return Err(Error::WrongAuctionKind);
        }
        if clock::effective_phase(&config, &state, now) != Phase::RevealPhase {
            return Err(Error::PhaseViolation);
        }

        let stored = storage::get_commitment(&env, &bidder).ok_or(Error::RevealMismatch)?;
        if !commitment::verify(&env, &stored, price, &salt) {
            return Err(Error::RevealMismatch);
        }
        if price < pricing::required_price(&config, &state, now)
            || storage::get_refund(&env, &bidder) < price
        {
            return Err(Error::InsufficientValue);
        }

        storage::remove_commitment(&env, &bidder);
        storage::add_revealed_bid(
            &env,
            RevealedBid {
                bidder: bidder.clone(),
                price,
            },
        );

        let leading = state.winner.is_none() || price > state.current_value;
        if leading {
            ledger::debit(&env, &bidder, price)?;
            ledger::replace_winner(&env, &mut state, &bidder, price)?;
            storage::set_state(&env, &state);
        }
        storage::extend_instance_ttl(&env);

        BidRevealedEventData {
            bidder,
            price,
            leading,
        }
        .publish(&env);

        Ok(leading)
    }

    // ========== CLOSING ==========

    /// Seller withdraws the auction. Open and public auctions can only be
    /// cancelled before anyone other than the seller has bid; private auctions
    /// any time before settlement. Value and the record go back on the next
    /// `finalize`.
    ///
    /// # Errors
    /// * `Error::UnauthorizedCaller` - caller is not the seller
    /// * `Error::CannotCancelWithBids` - a public auction already has bids
    /// * `Error::PhaseViolation` - bidding is over on a public auction
    pub fn cancel_auction(env: Env, caller: Address) -> Result<Outcome, Error> {
        caller.require_auth();
        let config = load_config(&env)?;
        require_seller(&config, &caller)?;

        let mut state = storage::get_state(&env);
        let now = env.ledger().timestamp();
        let phase = clock::effective_phase(&config, &state, now);

        if phase.is_terminal() {
            return Ok(Outcome::AlreadyTerminal);
        }

        match config.visibility {
            Visibility::Private => {}
            Visibility::Open | Visibility::Public => {
                if !matches!(phase, Phase::AwaitingAsset | Phase::Active) {
                    return Err(Error::PhaseViolation);
                }
                if state.outside_bids {
                    return Err(Error::CannotCancelWithBids);
                }
            }
        }

        state.phase = Phase::Cancelled;
        storage::set_state(&env, &state);
        storage::extend_instance_ttl(&env);

        AuctionCancelledEventData { seller: caller }.publish(&env);

        Ok(Outcome::Cancelled)
    }

    /// Settle the auction: pay seller, escrow agent and fee collector, hand
    /// the record over and flush every refund balance. Anyone may call it.
    ///
    /// Refund balances are paid out a page at a time. Safe to call
    /// repeatedly; once settled it returns `Outcome::AlreadyTerminal` and only
    /// pays the next page of refunds and retries a record handoff that the
    /// asset contract previously refused.
    ///
    /// # Errors
    /// * `Error::AuctionInProgress` - bidding or revealing is still open
    /// * `Error::PhaseViolation` - the record was never received
    pub fn finalize(env: Env, caller: Address) -> Result<Outcome, Error> {
        caller.require_auth();
        let config = load_config(&env)?;
        let mut state = storage::get_state(&env);
        let now = env.ledger().timestamp();

        if state.settled {
            if let Some(recipient) = state.asset_pending.clone() {
                if settlement::hand_over_asset(&env, &config, &recipient) {
                    state.asset_pending = None;
                }
            }
            settlement::flush_refunds(&env, &config, &mut state)?;
            storage::set_state(&env, &state);
            return Ok(Outcome::AlreadyTerminal);
        }

        match clock::effective_phase(&config, &state, now) {
            Phase::Ended => state.phase = Phase::Ended,
            Phase::Cancelled => {}
            Phase::Active | Phase::RevealPhase => return Err(Error::AuctionInProgress),
            Phase::Created | Phase::AwaitingAsset => return Err(Error::PhaseViolation),
            Phase::Finalized => return Ok(Outcome::AlreadyTerminal),
        }

        settlement::settle(&env, &config, &mut state)?;
        storage::set_state(&env, &state);
        storage::extend_instance_ttl(&env);

        Ok(Outcome::Settled)
    }

    /// Pull the caller's refund balance. Blind deposits stay locked until the
    /// reveal window has closed.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = load_config(&env)?;
        let state = storage::get_state(&env);
        let now = env.ledger().timestamp();

        if config.kind == AuctionKind::EnglishBlind
            && matches!(
                clock::effective_phase(&config, &state, now),
                Phase::Active | Phase::RevealPhase
            )
        {
            return Err(Error::PhaseViolation);
        }

        let amount = ledger::take(&env, &caller);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let token_client = token::TokenClient::new(&env, &config.payment_token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);
        storage::extend_instance_ttl(&env);

        RefundWithdrawnEventData {
            bidder: caller,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    // ========== VIEWS ==========

    pub fn get_info(env: Env) -> Result<AuctionInfo, Error> {
        let config = load_config(&env)?;
        let state = storage::get_state(&env);
        Ok(AuctionInfo {
            phase: clock::effective_phase(&config, &state, env.ledger().timestamp()),
            winner: state.winner,
            current_value: state.current_value,
            config,
        })
    }

    /// Lowest acceptable bid (or revealable price) right now.
    pub fn get_desired_price(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        let state = storage::get_state(&env);
        Ok(pricing::required_price(
            &config,
            &state,
            env.ledger().timestamp(),
        ))
    }

    pub fn get_phase(env: Env) -> Phase {
        let state = storage::get_state(&env);
        match storage::get_config(&env) {
            Some(config) => clock::effective_phase(&config, &state, env.ledger().timestamp()),
            None => state.phase,
        }
    }

    /// Commitment a bidder should pass to `bid_blind` for `price` and `salt`.
    pub fn hash_price(env: Env, price: i128, salt: BytesN<32>) -> BytesN<32> {
        commitment::hash_price(&env, price, &salt)
    }

    pub fn get_refund(env: Env, bidder: Address) -> i128 {
        storage::get_refund(&env, &bidder)
    }

    /// Value currently owed to bidders plus the winner's locked value.
    pub fn get_held_value(env: Env) -> i128 {
        ledger::total_refunds(&env).saturating_add(storage::get_state(&env).current_value)
    }

    pub fn get_bid_history(env: Env) -> Vec<Bid> {
        storage::get_bid_history(&env)
    }

    pub fn get_revealed_bids(env: Env) -> Vec<RevealedBid> {
        storage::get_revealed_bids(&env)
    }
}

// ========== INTERNAL HELPERS ==========

fn load_config(env: &Env) -> Result<AuctionConfig, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

fn require_seller(config: &AuctionConfig, caller: &Address) -> Result<(), Error> {
    if *caller != config.seller {
        return Err(Error::UnauthorizedCaller);
    }
    Ok(())
}

fn require_eligible(config: &AuctionConfig, bidder: &Address) -> Result<(), Error> {
    let allowed = match config.visibility {
        Visibility::Open => true,
        Visibility::Public => *bidder != config.seller,
        Visibility::Private => config.buyer.as_ref() == Some(bidder),
    };
    if !allowed {
        return Err(Error::UnauthorizedCaller);
    }
    Ok(())
}

fn collect(env: &Env, config: &AuctionConfig, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &config.payment_token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

fn validate_config(config: &AuctionConfig) -> Result<(), Error> {
    let timing_ok = match config.kind {
        AuctionKind::EnglishForward => config.reveal_end_time == 0 && config.dutch_cycle == 0,
        AuctionKind::EnglishBlind => {
            config.dutch_cycle == 0 && config.reveal_end_time > config.end_time
        }
        AuctionKind::DutchForward => {
            config.reveal_end_time == 0
                && config.dutch_cycle > 0
                && config.min_price_step > 0
                && config.buy_now_price <= config.min_bid
        }
    };
    let buyer_ok = match config.visibility {
        Visibility::Private => config.buyer.is_some(),
        Visibility::Open | Visibility::Public => config.buyer.is_none(),
    };

    if !timing_ok
        || !buyer_ok
        || config.end_time <= config.start_time
        || config.escrow_bps > MAX_BPS
        || config.min_bid <= 0
        || config.min_price_step < 0
        || config.fee_value < 0
        || config.buy_now_price < 0
    {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

#[cfg(test)]
mod test;
