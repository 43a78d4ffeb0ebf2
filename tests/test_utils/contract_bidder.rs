//! Contract bidder for refund fallback tests
//!
//! Being a contract, it cannot take a direct native transfer, so any refund
//! owed to it must end up in the escrow.

use odra::prelude::*;
use odra::ContractRef;

use odra::casper_types::U512;

use mosaics::auction_house::AuctionHouseContractRef;
use mosaics::interfaces::PaymentEscrowContractRef;

#[odra::module]
pub struct ContractBidder {
    bids_placed: Var<u32>,
}

#[odra::module]
impl ContractBidder {
    pub fn init(&mut self) {
        self.bids_placed.set(0);
    }

    /// Forward the attached value as a bid on `auction_house`
    #[odra(payable)]
    pub fn bid(&mut self, auction_house: Address, mosaic_id: u64) {
        let value = self.env().attached_value();
        AuctionHouseContractRef::new(self.env(), auction_house)
            .with_tokens(value)
            .create_bid(mosaic_id);
        self.bids_placed.set(self.bids_placed.get_or_default() + 1);
    }

    /// Pull this contract's refunds out of `escrow`
    pub fn withdraw_from(&mut self, escrow: Address) -> U512 {
        PaymentEscrowContractRef::new(self.env(), escrow).withdraw()
    }

    pub fn bids_placed(&self) -> u32 {
        self.bids_placed.get_or_default()
    }
}
