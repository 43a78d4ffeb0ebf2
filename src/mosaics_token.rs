//! Mosaics token - sequentially numbered collectibles
//!
//! Only the minter can issue new mosaics, and every issued id is minted to the
//! minter itself. In production the minter is the auction house, which then
//! hands each mosaic to its winner or burns it.

use odra::prelude::*;

use crate::errors::Error;
use crate::events::{AdminTransferred, MinterLocked, MinterUpdated, MosaicBurned, MosaicCreated, MosaicTransferred};

const NAME: &str = "Mosaics";
const SYMBOL: &str = "MOSAIC";

/// Mosaics collectible ledger
#[odra::module]
pub struct MosaicsToken {
    // Ledger
    owners: Mapping<u64, Option<Address>>,
    balances: Mapping<Address, u64>,
    next_mosaic_id: Var<u64>,
    total_supply: Var<u64>,

    // Minting authority
    minter: Var<Option<Address>>,
    is_minter_locked: Var<bool>,

    // Admin
    admin: Var<Address>,
}

#[odra::module]
impl MosaicsToken {
    /// Initialize the token with no minter
    pub fn init(&mut self, admin: Address) {
        self.admin.set(admin);
        self.minter.set(None);
        self.is_minter_locked.set(false);
        self.next_mosaic_id.set(0);
        self.total_supply.set(0);
    }

    // ============ MINTER FUNCTIONS ============

    /// Mint the next mosaic to the minter and return its id
    pub fn issue_next(&mut self) -> u64 {
        let minter = self.require_minter();

        let mosaic_id = self.next_mosaic_id.get_or_default();
        self.next_mosaic_id.set(mosaic_id + 1);

        self.owners.set(&mosaic_id, Some(minter));
        self.balances.set(&minter, self.balances.get_or_default(&minter) + 1);
        self.total_supply.set(self.total_supply.get_or_default() + 1);

        self.env().emit_event(MosaicCreated {
            mosaic_id,
            owner: minter,
        });

        mosaic_id
    }

    // ============ OWNER FUNCTIONS ============

    /// Transfer a mosaic owned by the caller
    pub fn transfer(&mut self, mosaic_id: u64, to: Address) {
        let from = self.require_owner(mosaic_id);

        self.owners.set(&mosaic_id, Some(to));
        self.balances.set(&from, self.balances.get_or_default(&from) - 1);
        self.balances.set(&to, self.balances.get_or_default(&to) + 1);

        self.env().emit_event(MosaicTransferred { mosaic_id, from, to });
    }

    /// Burn a mosaic owned by the caller
    ///
    /// A burned id stays consumed: `issue_next` never returns it again and a
    /// second burn reverts with `MosaicNotFound`.
    pub fn burn(&mut self, mosaic_id: u64) {
        let owner = self.require_owner(mosaic_id);

        self.owners.set(&mosaic_id, None);
        self.balances.set(&owner, self.balances.get_or_default(&owner) - 1);
        self.total_supply.set(self.total_supply.get_or_default() - 1);

        self.env().emit_event(MosaicBurned { mosaic_id });
    }

    // ============ VIEW FUNCTIONS ============

    pub fn minter(&self) -> Option<Address> {
        self.minter.get().flatten()
    }

    pub fn owner_of(&self, mosaic_id: u64) -> Option<Address> {
        self.owners.get(&mosaic_id).flatten()
    }

    pub fn exists(&self, mosaic_id: u64) -> bool {
        self.owner_of(mosaic_id).is_some()
    }

    pub fn balance_of(&self, owner: Address) -> u64 {
        self.balances.get_or_default(&owner)
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply.get_or_default()
    }

    /// Id the next `issue_next` call will return
    pub fn next_mosaic_id(&self) -> u64 {
        self.next_mosaic_id.get_or_default()
    }

    pub fn is_minter_locked(&self) -> bool {
        self.is_minter_locked.get_or_default()
    }

    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    pub fn name(&self) -> String {
        NAME.to_string()
    }

    pub fn symbol(&self) -> String {
        SYMBOL.to_string()
    }

    // ============ ADMIN FUNCTIONS ============

    /// Change the minting authority. `None` disables minting.
    pub fn set_minter(&mut self, minter: Option<Address>) {
        self.require_admin();
        if self.is_minter_locked.get_or_default() {
            self.env().revert(Error::MinterIsLocked);
        }
        self.minter.set(minter);
        self.env().emit_event(MinterUpdated { minter });
    }

    /// Freeze the current minter forever
    pub fn lock_minter(&mut self) {
        self.require_admin();
        if self.is_minter_locked.get_or_default() {
            self.env().revert(Error::MinterIsLocked);
        }
        self.is_minter_locked.set(true);
        self.env().emit_event(MinterLocked {
            minter: self.minter(),
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

    // Internal functions

    fn require_minter(&self) -> Address {
        let minter = self
            .minter()
            .unwrap_or_revert_with(&self.env(), Error::MinterNotSet);
        if self.env().caller() != minter {
            self.env().revert(Error::NotMinter);
        }
        minter
    }

    fn require_owner(&self, mosaic_id: u64) -> Address {
        let owner = self
            .owner_of(mosaic_id)
            .unwrap_or_revert_with(&self.env(), Error::MosaicNotFound);
        if self.env().caller() != owner {
            self.env().revert(Error::NotMosaicOwner);
        }
        owner
    }

    fn require_admin(&self) {
        let admin = self.admin.get().unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        if self.env().caller() != admin {
            self.env().revert(Error::NotAdmin);
        }
    }
}
