use crate::asset::NameRecordClient;
use crate::errors::Error;
use crate::events::{
    AssetTransferFailedEventData, AuctionFinalizedEventData, PayoutFailedEventData,
};
use crate::ledger;
use crate::storage;
use crate::types::{AuctionConfig, AuctionState, Phase};
use soroban_sdk::{log, token, Address, Env};

const BPS_DENOMINATOR: i128 = 10_000;

/// Refund balances paid out per `finalize` call.
pub const REFUND_PAGE: u32 = 25;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Split {
    pub seller: i128,
    pub escrow: i128,
    pub fee: i128,
}

/// Escrow commission comes off the top, rounded down; the fixed fee is capped
/// at what is left. `escrow_bps` is at most 10 000, so nothing here overflows.
pub fn split(value: i128, escrow_bps: u32, fee_value: i128) -> Split {
    let bps = escrow_bps as i128;
    let escrow =
        (value / BPS_DENOMINATOR) * bps + (value % BPS_DENOMINATOR) * bps / BPS_DENOMINATOR;
    let fee = fee_value.min(value - escrow).max(0);
    Split {
        seller: value - escrow - fee,
        escrow,
        fee,
    }
}

/// Runs settlement once. Every transfer is attempted on its own; a rejected
/// payout is credited back to the recipient's refund balance and a rejected
/// asset handoff is left in `state.asset_pending`. Only the first page of
/// refund balances is flushed here; later `finalize` calls continue.
pub fn settle(
    env: &Env,
    config: &AuctionConfig,
    state: &mut AuctionState,
) -> Result<(), Error> {
    let token_client = token::TokenClient::new(env, &config.payment_token);

    flush_page(env, &token_client, state)?;

    let winner = match (state.phase, state.winner.clone()) {
        (Phase::Cancelled, _) | (_, None) => None,
        (_, Some(winner)) => Some(winner),
    };

    let mut shares = Split {
        seller: 0,
        escrow: 0,
        fee: 0,
    };

    let asset_recipient = match &winner {
        Some(winner) => {
            shares = split(state.current_value, config.escrow_bps, config.fee_value);
            pay(env, &token_client, &config.seller, shares.seller)?;
            pay(env, &token_client, &config.escrow, shares.escrow)?;
            pay(env, &token_client, &config.fee_collector, shares.fee)?;
            winner.clone()
        }
        None => {
            // Cancelled or unsold: the locked value goes back to whoever holds it.
            if let Some(holder) = state.winner.clone() {
                pay(env, &token_client, &holder, state.current_value)?;
            }
            config.seller.clone()
        }
    };
    state.current_value = 0;

    state.asset_pending = None;
    if !hand_over_asset(env, config, &asset_recipient) {
        state.asset_pending = Some(asset_recipient);
    }

    state.settled = true;
    if state.phase != Phase::Cancelled {
        state.phase = Phase::Finalized;
    }

    AuctionFinalizedEventData {
        asset: config.asset.clone(),
        winner,
        value: shares.seller + shares.escrow + shares.fee,
        seller_amount: shares.seller,
        escrow_amount: shares.escrow,
        fee_amount: shares.fee,
    }
    .publish(env);

    Ok(())
}

/// Gives the record to `recipient` if the auction still owns it. Returns
/// false only when the asset contract rejected the handoff.
pub fn hand_over_asset(env: &Env, config: &AuctionConfig, recipient: &Address) -> bool {
    let asset_client = NameRecordClient::new(env, &config.asset);
    let contract_address = env.current_contract_address();

    let owned = matches!(asset_client.try_owner(), Ok(Ok(owner)) if owner == contract_address);
    if !owned {
        return true;
    }

    if matches!(asset_client.try_change_owner(recipient), Ok(Ok(()))) {
        return true;
    }

    log!(env, "asset handoff rejected", recipient);
    AssetTransferFailedEventData {
        recipient: recipient.clone(),
    }
    .publish(env);
    false
}

/// Pays out the next page of refund balances after settlement.
pub fn flush_refunds(
    env: &Env,
    config: &AuctionConfig,
    state: &mut AuctionState,
) -> Result<(), Error> {
    if state.refund_cursor >= storage::depositor_count(env) {
        return Ok(());
    }
    let token_client = token::TokenClient::new(env, &config.payment_token);
    flush_page(env, &token_client, state)
}

fn flush_page(
    env: &Env,
    token_client: &token::TokenClient,
    state: &mut AuctionState,
) -> Result<(), Error> {
    let end = state
        .refund_cursor
        .saturating_add(REFUND_PAGE)
        .min(storage::depositor_count(env));
    for index in state.refund_cursor..end {
        if let Some(bidder) = storage::get_depositor(env, index) {
            let amount = ledger::take(env, &bidder);
            pay(env, token_client, &bidder, amount)?;
        }
    }
    state.refund_cursor = end;
    Ok(())
}

fn pay(
    env: &Env,
    token_client: &token::TokenClient,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }
    let from = env.current_contract_address();
    if matches!(token_client.try_transfer(&from, to, &amount), Ok(Ok(()))) {
        return Ok(());
    }

    log!(env, "payout rejected", to, amount);
    ledger::credit(env, to, amount)?;
    PayoutFailedEventData {
        recipient: to.clone(),
        amount,
    }
    .publish(env);
    Ok(())
}
