use crate::types::{AuctionConfig, AuctionKind, AuctionState};

/// Lowest amount the auction accepts right now.
///
/// English auctions ask for `min_bid` until someone bids, then the current
/// value plus one step. Blind auctions ask for `min_bid` as the smallest
/// revealable price. Dutch auctions decay from `min_bid` by one step per
/// elapsed cycle and never go below `buy_now_price`.
pub fn required_price(config: &AuctionConfig, state: &AuctionState, now: u64) -> i128 {
    match config.kind {
        AuctionKind::EnglishForward => match state.winner {
            Some(_) => state
                .current_value
                .saturating_add(config.min_price_step)
                .max(config.min_bid),
            None => config.min_bid,
        },
        AuctionKind::EnglishBlind => config.min_bid,
        AuctionKind::DutchForward => dutch_price(config, now),
    }
}

pub fn dutch_price(config: &AuctionConfig, now: u64) -> i128 {
    if config.dutch_cycle == 0 {
        return config.min_bid;
    }
    let elapsed = now.saturating_sub(config.start_time);
    let cycles = (elapsed / config.dutch_cycle) as i128;
    config
        .min_bid
        .saturating_sub(cycles.saturating_mul(config.min_price_step))
        .max(config.buy_now_price)
}

/// A forward English bid at or above the buy-now price closes bidding.
pub fn hits_buy_now(config: &AuctionConfig, value: i128) -> bool {
    config.buy_now_price > 0 && value >= config.buy_now_price
}
