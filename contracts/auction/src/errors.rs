use soroban_sdk::contracterror;

/// Error codes for the auction contract.
///
/// Codes start at 200; 203 is the long-standing "auction in progress" code
/// that wallets and scripts already match on.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called
    AlreadyInitialized = 200,
    /// No configuration stored yet
    NotInitialized = 201,
    /// Configuration rejected by validation
    InvalidConfig = 202,
    /// `finalize` called before bidding (or revealing) is over
    AuctionInProgress = 203,
    /// Operation not valid in the current phase
    PhaseViolation = 204,
    /// Caller is not the seller, or not allowed to bid
    UnauthorizedCaller = 205,
    /// Bid, deposit or revealed price below what is required
    InsufficientValue = 206,
    /// Revealed price and salt do not match the stored commitment
    RevealMismatch = 207,
    /// The asset contract does not report the auction as owner
    AssetNotReceived = 208,
    /// Public auctions cannot be cancelled once someone has bid
    CannotCancelWithBids = 209,
    /// Caller has no refund balance
    NothingToWithdraw = 210,
    /// Operation does not exist for this auction kind
    WrongAuctionKind = 211,
    /// A balance would leave the `i128` range
    ArithmeticOverflow = 212,
}
