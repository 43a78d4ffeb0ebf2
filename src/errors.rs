//! Error definitions for the Mosaics auction house

use odra::prelude::*;

/// Mosaics errors
///
/// Codes are grouped: validation (1-19), authorization (20-29),
/// precondition (30-49), external dependency (50-59) and
/// collaborator contracts (60-79).
#[odra::odra_error]
pub enum Error {
    // ============ VALIDATION ============
    /// No auction has ever been created
    AuctionNotFound = 1,
    /// Bid targets a mosaic that is not the one up for auction
    MosaicNotUpForAuction = 2,
    /// Auction end time has passed
    AuctionExpired = 3,
    /// First bid is below the reserve price
    BelowReservePrice = 4,
    /// Bid does not beat the last bid by the minimum increment
    BidIncrementTooLow = 5,
    /// Configuration value is out of range
    InvalidParameter = 6,

    // ============ AUTHORIZATION ============
    /// Caller is not admin
    NotAdmin = 20,
    /// Admin address not set
    AdminNotSet = 21,

    // ============ PRECONDITION ============
    /// Settlement attempted before any auction was created
    AuctionNotStarted = 30,
    /// Auction has not reached its end time
    AuctionNotEnded = 31,
    /// Auction has already been settled
    AuctionAlreadySettled = 32,
    /// Contract is already paused
    AlreadyPaused = 33,
    /// Contract is not paused
    NotPaused = 34,
    /// Nested call into the auction house
    Reentrant = 35,

    // ============ EXTERNAL DEPENDENCY ============
    /// Auction house is not the authorized minter of the token
    MintingSourceUnavailable = 50,
    /// Minting source address not set
    MintingSourceNotSet = 51,
    /// Escrow address not set
    EscrowNotSet = 52,
    /// Treasury address not set
    TreasuryNotSet = 53,

    // ============ COLLABORATORS ============
    /// Caller is not authorized minter
    NotMinter = 60,
    /// Minter address not set
    MinterNotSet = 61,
    /// Minter has been locked and can no longer change
    MinterIsLocked = 62,
    /// Mosaic does not exist or was burned
    MosaicNotFound = 63,
    /// Caller does not own the mosaic
    NotMosaicOwner = 64,
    /// Escrow balance is zero
    NothingToWithdraw = 70,
}
