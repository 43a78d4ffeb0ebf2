//! AuctionHouse - perpetual English auction for Mosaics
//!
//! One mosaic is up for auction at a time. Settling an auction hands the
//! mosaic to the highest bidder (or burns it when nobody bid) and, unless the
//! house is paused, immediately mints the next mosaic and opens its auction.

use odra::prelude::*;
use odra::casper_types::U512;
use odra::ContractRef;

use crate::errors::Error;
use crate::events::{
    AdminTransferred, AuctionBid, AuctionCreated, AuctionDurationUpdated, AuctionExtended,
    AuctionMinBidIncrementPercentageUpdated, AuctionReservePriceUpdated, AuctionSettled,
    AuctionTimeBufferUpdated, Paused, TreasuryUpdated, Unpaused,
};
use crate::interfaces::{MintingSourceContractRef, PaymentEscrowContractRef};

/// The single auction slot
///
/// Times are in seconds.
#[odra::odra_type]
pub struct Auction {
    pub mosaic_id: u64,
    pub amount: U512,
    pub start_time: u64,
    pub end_time: u64,
    pub bidder: Option<Address>,
    pub settled: bool,
}

/// AuctionHouse - auction state machine and pause interlock
#[odra::module]
pub struct AuctionHouse {
    // Collaborators
    mosaics_token: Var<Address>,
    escrow: Var<Address>,
    treasury: Var<Address>,

    // Auction state
    auction: Var<Auction>,

    // Auction config (seconds / motes / percent)
    time_buffer: Var<u64>,
    reserve_price: Var<U512>,
    min_bid_increment_percentage: Var<u8>,
    duration: Var<u64>,

    // Admin
    admin: Var<Address>,
    is_paused: Var<bool>,

    // Set for the duration of any entry point that calls out
    locked: Var<bool>,
}

const MS_PER_SECOND: u64 = 1000;
const MAX_INCREMENT_PERCENTAGE: u8 = 100;

#[odra::module]
impl AuctionHouse {
    /// Initialize the auction house
    ///
    /// The house starts paused and empty; the first `unpause` opens auction #0.
    ///
    /// # Arguments
    /// * `mosaics_token` - Minting source; must list this contract as minter
    /// * `escrow` - Refund escrow used when a direct payment is not possible
    /// * `treasury` - Receiver of winning bids
    /// * `admin` - Admin address for contract management
    pub fn init(
        &mut self,
        mosaics_token: Address,
        escrow: Address,
        treasury: Address,
        admin: Address,
        time_buffer: u64,
        reserve_price: U512,
        min_bid_increment_percentage: u8,
        duration: u64,
    ) {
        if duration == 0 || min_bid_increment_percentage > MAX_INCREMENT_PERCENTAGE {
            self.env().revert(Error::InvalidParameter);
        }

        self.mosaics_token.set(mosaics_token);
        self.escrow.set(escrow);
        self.treasury.set(treasury);
        self.admin.set(admin);
        self.time_buffer.set(time_buffer);
        self.reserve_price.set(reserve_price);
        self.min_bid_increment_percentage.set(min_bid_increment_percentage);
        self.duration.set(duration);
        self.is_paused.set(true);
        self.locked.set(false);
    }

    // ============ CORE FUNCTIONS ============

    /// Bid the attached CSPR on the mosaic currently up for auction
    ///
    /// The previous highest bidder is refunded before the new bid is recorded.
    /// A bid landing within `time_buffer` of the end pushes the end to
    /// `now + time_buffer`.
    #[odra(payable)]
    pub fn create_bid(&mut self, mosaic_id: u64) {
        self.enter();

        let caller = self.env().caller();
        let value = self.env().attached_value();
        let mut auction = self
            .auction
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AuctionNotFound);

        if auction.mosaic_id != mosaic_id {
            self.env().revert(Error::MosaicNotUpForAuction);
        }

        let now = self.now();
        if auction.settled || now >= auction.end_time {
            self.env().revert(Error::AuctionExpired);
        }

        if auction.amount.is_zero() {
            if value < self.reserve_price.get_or_default() {
                self.env().revert(Error::BelowReservePrice);
            }
        } else if value < self.next_minimum(auction.amount) {
            self.env().revert(Error::BidIncrementTooLow);
        }

        // Refund or escrow the displaced bid BEFORE recording the new one
        if let Some(last_bidder) = auction.bidder {
            self.send_with_fallback(last_bidder, auction.amount);
        }

        auction.amount = value;
        auction.bidder = Some(caller);

        let time_buffer = self.time_buffer.get_or_default();
        let extended = auction.end_time - now < time_buffer;
        if extended {
            auction.end_time = now.saturating_add(time_buffer);
        }

        self.auction.set(auction.clone());

        self.env().emit_event(AuctionBid {
            mosaic_id,
            bidder: caller,
            value,
            extended,
        });

        if extended {
            self.env().emit_event(AuctionExtended {
                mosaic_id,
                end_time: auction.end_time,
            });
        }

        self.exit();
    }

    /// Settle the current auction without opening the next one
    ///
    /// Only available while paused. A live house rolls over through
    /// `settle_current_and_create_new_auction`.
    pub fn settle_auction(&mut self) {
        self.enter();
        if !self.is_paused.get_or_default() {
            self.env().revert(Error::NotPaused);
        }
        self.settle();
        self.exit();
    }

    /// Settle the current auction and, if the house is live, open the next one
    ///
    /// When the minting source no longer lists this contract as minter the
    /// settlement still goes through and the house pauses itself instead.
    pub fn settle_current_and_create_new_auction(&mut self) {
        self.enter();
        self.settle();

        if !self.is_paused.get_or_default() {
            if self.minting_available() {
                self.create_auction();
            } else {
                self.is_paused.set(true);
                self.env().emit_event(Paused {
                    by: self.env().self_address(),
                });
            }
        }

        self.exit();
    }

    // ============ VIEW FUNCTIONS ============

    pub fn get_auction(&self) -> Option<Auction> {
        self.auction.get()
    }

    /// Smallest bid `create_bid` would accept right now
    ///
    /// `None` when there is no auction taking bids.
    pub fn minimum_bid(&self) -> Option<U512> {
        let auction = self.auction.get()?;
        if auction.settled || self.now() >= auction.end_time {
            return None;
        }
        if auction.amount.is_zero() {
            Some(self.reserve_price.get_or_default())
        } else {
            Some(self.next_minimum(auction.amount))
        }
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused.get_or_default()
    }

    pub fn get_time_buffer(&self) -> u64 {
        self.time_buffer.get_or_default()
    }

    pub fn get_reserve_price(&self) -> U512 {
        self.reserve_price.get_or_default()
    }

    pub fn get_min_bid_increment_percentage(&self) -> u8 {
        self.min_bid_increment_percentage.get_or_default()
    }

    pub fn get_duration(&self) -> u64 {
        self.duration.get_or_default()
    }

    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    pub fn get_treasury(&self) -> Option<Address> {
        self.treasury.get()
    }

    pub fn get_mosaics_token(&self) -> Option<Address> {
        self.mosaics_token.get()
    }

    pub fn get_escrow(&self) -> Option<Address> {
        self.escrow.get()
    }

    // ============ INTERNAL FUNCTIONS ============

    fn now(&self) -> u64 {
        self.env().get_block_time() / MS_PER_SECOND
    }

    fn next_minimum(&self, amount: U512) -> U512 {
        let pct = self.min_bid_increment_percentage.get_or_default();
        amount + amount * U512::from(pct) / U512::from(100u64)
    }

    fn enter(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(Error::Reentrant);
        }
        self.locked.set(true);
    }

    fn exit(&mut self) {
        self.locked.set(false);
    }

    /// Whether no auction currently holds the slot
    fn slot_free(&self) -> bool {
        self.auction.get().map_or(true, |auction| auction.settled)
    }

    fn minting_source(&self) -> MintingSourceContractRef {
        let token = self
            .mosaics_token
            .get()
            .unwrap_or_revert_with(&self.env(), Error::MintingSourceNotSet);
        MintingSourceContractRef::new(self.env(), token)
    }

    fn minting_available(&self) -> bool {
        self.minting_source().minter() == Some(self.env().self_address())
    }

    fn create_auction(&mut self) {
        let mosaic_id = self.minting_source().issue_next();

        let start_time = self.now();
        let end_time = start_time.saturating_add(self.duration.get_or_default());

        self.auction.set(Auction {
            mosaic_id,
            amount: U512::zero(),
            start_time,
            end_time,
            bidder: None,
            settled: false,
        });

        self.env().emit_event(AuctionCreated {
            mosaic_id,
            start_time,
            end_time,
        });
    }

    fn settle(&mut self) {
        let mut auction = self
            .auction
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AuctionNotStarted);

        if auction.settled {
            self.env().revert(Error::AuctionAlreadySettled);
        }
        if self.now() < auction.end_time {
            self.env().revert(Error::AuctionNotEnded);
        }

        auction.settled = true;
        self.auction.set(auction.clone());

        match auction.bidder {
            Some(winner) => {
                self.minting_source().transfer(auction.mosaic_id, winner);
                let treasury = self
                    .treasury
                    .get()
                    .unwrap_or_revert_with(&self.env(), Error::TreasuryNotSet);
                self.send_with_fallback(treasury, auction.amount);
            }
            None => self.minting_source().burn(auction.mosaic_id),
        }

        self.env().emit_event(AuctionSettled {
            mosaic_id: auction.mosaic_id,
            winner: auction.bidder,
            amount: auction.amount,
        });
    }

    /// Pay `amount` to `to`, falling back to the escrow
    ///
    /// Only account addresses can take a direct transfer: it is a plain purse
    /// balance update with no code on the receiving side. Anything else gets
    /// its amount deposited in escrow under its own name.
    fn send_with_fallback(&self, to: Address, amount: U512) {
        if amount.is_zero() {
            return;
        }
        if !self.try_send_native(&to, &amount) {
            let escrow = self
                .escrow
                .get()
                .unwrap_or_revert_with(&self.env(), Error::EscrowNotSet);
            PaymentEscrowContractRef::new(self.env(), escrow)
                .with_tokens(amount)
                .deposit(to);
        }
    }

    fn try_send_native(&self, to: &Address, amount: &U512) -> bool {
        match to {
            Address::Account(_) => {
                self.env().transfer_tokens(to, amount);
                true
            }
            _ => false,
        }
    }

    fn require_admin(&self) {
        let admin = self.admin.get().unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        if self.env().caller() != admin {
            self.env().revert(Error::NotAdmin);
        }
    }

    // ============ ADMIN FUNCTIONS ============

    /// Stop new auctions from opening. A running auction keeps taking bids.
    pub fn pause(&mut self) {
        self.require_admin();
        if self.is_paused.get_or_default() {
            self.env().revert(Error::AlreadyPaused);
        }
        self.is_paused.set(true);
        self.env().emit_event(Paused {
            by: self.env().caller(),
        });
    }

    /// Resume the house, opening a new auction if the slot is free
    ///
    /// With an unsettled auction still in the slot only the flag changes.
    pub fn unpause(&mut self) {
        self.require_admin();
        if !self.is_paused.get_or_default() {
            self.env().revert(Error::NotPaused);
        }
        self.enter();

        self.is_paused.set(false);
        self.env().emit_event(Unpaused {
            by: self.env().caller(),
        });

        if self.slot_free() {
            if !self.minting_available() {
                self.env().revert(Error::MintingSourceUnavailable);
            }
            self.create_auction();
        }

        self.exit();
    }

    pub fn set_time_buffer(&mut self, time_buffer: u64) {
        self.require_admin();
        self.time_buffer.set(time_buffer);
        self.env().emit_event(AuctionTimeBufferUpdated { time_buffer });
    }

    pub fn set_reserve_price(&mut self, reserve_price: U512) {
        self.require_admin();
        self.reserve_price.set(reserve_price);
        self.env().emit_event(AuctionReservePriceUpdated { reserve_price });
    }

    pub fn set_min_bid_increment_percentage(&mut self, min_bid_increment_percentage: u8) {
        self.require_admin();
        if min_bid_increment_percentage > MAX_INCREMENT_PERCENTAGE {
            self.env().revert(Error::InvalidParameter);
        }
        self.min_bid_increment_percentage.set(min_bid_increment_percentage);
        self.env().emit_event(AuctionMinBidIncrementPercentageUpdated {
            min_bid_increment_percentage,
        });
    }

    /// Applies from the next auction on; the running one keeps its end time
    pub fn set_duration(&mut self, duration: u64) {
        self.require_admin();
        if duration == 0 {
            self.env().revert(Error::InvalidParameter);
        }
        self.duration.set(duration);
        self.env().emit_event(AuctionDurationUpdated { duration });
    }

    pub fn set_treasury(&mut self, treasury: Address) {
        self.require_admin();
        let old_treasury = self
            .treasury
            .get()
            .unwrap_or_revert_with(&self.env(), Error::TreasuryNotSet);
        self.treasury.set(treasury);
        self.env().emit_event(TreasuryUpdated {
            old_treasury,
            new_treasury: treasury,
        });
    }

    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.require_admin();
        let old_admin = self.admin.get().unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        self.admin.set(new_admin);
        self.env().emit_event(AdminTransferred {
            old_admin,
            new_admin,
        });
    }
}
