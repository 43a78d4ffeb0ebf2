//! Events for the Mosaics auction house (CEP-88 compliant)

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted when a new auction opens
#[odra::event]
pub struct AuctionCreated {
    pub mosaic_id: u64,
    pub start_time: u64,
    pub end_time: u64,
}

/// Emitted on every accepted bid
#[odra::event]
pub struct AuctionBid {
    pub mosaic_id: u64,
    pub bidder: Address,
    pub value: U512,
    pub extended: bool,
}

/// Emitted when a late bid pushes the end time forward
#[odra::event]
pub struct AuctionExtended {
    pub mosaic_id: u64,
    pub end_time: u64,
}

/// Emitted when an auction is settled. `winner` is `None` when the mosaic was burned.
#[odra::event]
pub struct AuctionSettled {
    pub mosaic_id: u64,
    pub winner: Option<Address>,
    pub amount: U512,
}

/// Emitted when the auction house is paused
#[odra::event]
pub struct Paused {
    pub by: Address,
}

/// Emitted when the auction house is unpaused
#[odra::event]
pub struct Unpaused {
    pub by: Address,
}

#[odra::event]
pub struct AuctionTimeBufferUpdated {
    pub time_buffer: u64,
}

#[odra::event]
pub struct AuctionReservePriceUpdated {
    pub reserve_price: U512,
}

#[odra::event]
pub struct AuctionMinBidIncrementPercentageUpdated {
    pub min_bid_increment_percentage: u8,
}

#[odra::event]
pub struct AuctionDurationUpdated {
    pub duration: u64,
}

/// Emitted when auction proceeds get a new destination
#[odra::event]
pub struct TreasuryUpdated {
    pub old_treasury: Address,
    pub new_treasury: Address,
}

/// Emitted when admin is transferred
#[odra::event]
pub struct AdminTransferred {
    pub old_admin: Address,
    pub new_admin: Address,
}

// ============ TOKEN EVENTS ============

#[odra::event]
pub struct MosaicCreated {
    pub mosaic_id: u64,
    pub owner: Address,
}

#[odra::event]
pub struct MosaicTransferred {
    pub mosaic_id: u64,
    pub from: Address,
    pub to: Address,
}

#[odra::event]
pub struct MosaicBurned {
    pub mosaic_id: u64,
}

/// Emitted when the minting authority changes. `None` disables minting.
#[odra::event]
pub struct MinterUpdated {
    pub minter: Option<Address>,
}

/// Emitted once when the minter is frozen
#[odra::event]
pub struct MinterLocked {
    pub minter: Option<Address>,
}

// ============ ESCROW EVENTS ============

/// Emitted when a refund lands in escrow instead of the recipient's account
#[odra::event]
pub struct EscrowDeposited {
    pub beneficiary: Address,
    pub amount: U512,
    pub total_balance: U512,
}

/// Emitted when a beneficiary pulls their escrowed balance
#[odra::event]
pub struct EscrowWithdrawn {
    pub beneficiary: Address,
    pub amount: U512,
}
