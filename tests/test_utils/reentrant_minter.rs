//! Minting source that calls back into the auction house on transfer

use odra::prelude::*;
use odra::ContractRef;

use mosaics::auction_house::AuctionHouseContractRef;

#[odra::module]
pub struct ReentrantMinter {
    next_mosaic_id: Var<u64>,
    minter: Var<Option<Address>>,
}

#[odra::module]
impl ReentrantMinter {
    pub fn init(&mut self) {
        self.next_mosaic_id.set(0);
        self.minter.set(None);
    }

    pub fn set_minter(&mut self, minter: Option<Address>) {
        self.minter.set(minter);
    }

    pub fn issue_next(&mut self) -> u64 {
        let mosaic_id = self.next_mosaic_id.get_or_default();
        self.next_mosaic_id.set(mosaic_id + 1);
        mosaic_id
    }

    /// Try to settle again while the auction house is mid-settlement
    #[allow(unused_variables)]
    pub fn transfer(&mut self, mosaic_id: u64, to: Address) {
        let auction_house = self.env().caller();
        AuctionHouseContractRef::new(self.env(), auction_house).settle_auction();
    }

    #[allow(unused_variables)]
    pub fn burn(&mut self, mosaic_id: u64) {}

    pub fn minter(&self) -> Option<Address> {
        self.minter.get().flatten()
    }
}
