use crate::types::{AuctionConfig, AuctionKind, AuctionState, Phase};

/// Phase of the auction at ledger time `now`.
///
/// Only `receive_asset`, `cancel_auction`, `finalize` and the buy-now / Dutch
/// win path write a phase; the move from `Active` into the reveal window and
/// then `Ended` is derived here from the deadlines, so late or reordered calls
/// always see the same answer.
pub fn effective_phase(config: &AuctionConfig, state: &AuctionState, now: u64) -> Phase {
    match state.phase {
        Phase::Active => match config.kind {
            AuctionKind::EnglishBlind => {
                if now < config.end_time {
                    Phase::Active
                } else if now < config.reveal_end_time {
                    Phase::RevealPhase
                } else {
                    Phase::Ended
                }
            }
            AuctionKind::EnglishForward | AuctionKind::DutchForward => {
                if now < config.end_time {
                    Phase::Active
                } else {
                    Phase::Ended
                }
            }
        },
        phase => phase,
    }
}

/// Bidding is open: the stored phase is live, `start_time` has passed and
/// `end_time` has not.
pub fn is_accepting_bids(config: &AuctionConfig, state: &AuctionState, now: u64) -> bool {
    effective_phase(config, state, now) == Phase::Active && now >= config.start_time
}
