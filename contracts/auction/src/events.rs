use soroban_sdk::{contractevent, Address, BytesN};

/// Seller handed the record to the auction; bidding is open
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetReceivedEventData {
    #[topic]
    pub seller: Address,
    pub asset: Address,
}

/// Forward bid accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub ends_auction: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlindBidCommittedEventData {
    #[topic]
    pub bidder: Address,
    pub commitment: BytesN<32>,
    pub deposit: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRevealedEventData {
    #[topic]
    pub bidder: Address,
    pub price: i128,
    pub leading: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub seller: Address,
}

/// Settlement ran; `winner` is `None` for cancelled or unsold auctions
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinalizedEventData {
    #[topic]
    pub asset: Address,
    pub winner: Option<Address>,
    pub value: i128,
    pub seller_amount: i128,
    pub escrow_amount: i128,
    pub fee_amount: i128,
}

/// A settlement transfer was rejected; the amount stays withdrawable
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutFailedEventData {
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}

/// The asset contract refused the handoff; a later `finalize` retries it
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransferFailedEventData {
    #[topic]
    pub recipient: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}
