use soroban_sdk::{contracttype, Address};

/// Bidding protocol. Kind-specific rules are matched exhaustively in the
/// contract, never dispatched dynamically.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionKind {
    /// Ascending open bids, highest bid at `end_time` wins.
    EnglishForward = 0,
    /// Sealed commitments during bidding, revealed before `reveal_end_time`.
    EnglishBlind = 1,
    /// Price steps down every `dutch_cycle`; first acceptable bid wins.
    DutchForward = 2,
}

/// Who may bid.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visibility {
    /// Anyone, the seller included.
    Open = 0,
    /// Anyone except the seller.
    Public = 1,
    /// Only the configured buyer.
    Private = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Created = 0,
    AwaitingAsset = 1,
    Active = 2,
    RevealPhase = 3,
    Ended = 4,
    Finalized = 5,
    Cancelled = 6,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Finalized | Phase::Cancelled)
    }
}

/// Result of a call that may land on an auction that is already closed.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// `finalize` ran settlement.
    Settled = 0,
    /// The auction was already terminal; nothing was settled again.
    AlreadyTerminal = 1,
    /// `cancel_auction` closed the auction; settlement follows on `finalize`.
    Cancelled = 2,
}

/// Parameters supplied by the auction manager at deploy time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub seller: Address,
    pub buyer: Option<Address>,
    pub asset: Address,
    pub payment_token: Address,
    pub kind: AuctionKind,
    pub visibility: Visibility,
    pub escrow: Address,
    pub escrow_bps: u32,
    pub fee_collector: Address,
    pub fee_value: i128,
    pub min_bid: i128,
    pub min_price_step: i128,
    /// Zero disables buy-now. For Dutch auctions this is the price floor.
    pub buy_now_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    /// Zero unless `kind` is `EnglishBlind`.
    pub reveal_end_time: u64,
    /// Zero unless `kind` is `DutchForward`.
    pub dutch_cycle: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub phase: Phase,
    pub winner: Option<Address>,
    /// Amount the winner pays on settlement.
    pub current_value: i128,
    pub settled: bool,
    /// Set when the asset handoff failed during settlement.
    pub asset_pending: Option<Address>,
    /// Sticky: someone other than the seller had a bid or commit accepted.
    pub outside_bids: bool,
    /// Next depositor index the refund flush pays out.
    pub refund_cursor: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInfo {
    pub phase: Phase,
    pub winner: Option<Address>,
    pub current_value: i128,
    pub config: AuctionConfig,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealedBid {
    pub bidder: Address,
    pub price: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    State,
    Refund(Address),
    Commitment(Address),
    DepositorCount,
    Depositor(u32),
    DepositorSeen(Address),
    BidCount,
    Bid(u32),
    RevealedCount,
    Revealed(u32),
}
