//! Interfaces of the auction house's external collaborators
//!
//! The auction house never reads another contract's storage. It reaches the
//! minting source and the escrow only through these entry points, so any
//! contract exposing them can be wired in at deployment.

use odra::casper_types::U512;
use odra::prelude::*;

/// Issues, transfers and retires the items being auctioned
#[odra::external_contract]
pub trait MintingSource {
    /// Mint the next sequential id to the caller
    ///
    /// Reverts unless the caller is the current minter.
    fn issue_next(&mut self) -> u64;

    /// Move `mosaic_id` from the caller to `to`
    fn transfer(&mut self, mosaic_id: u64, to: Address);

    /// Retire `mosaic_id`; it is never issued again
    fn burn(&mut self, mosaic_id: u64);

    /// Current minting authority, `None` when minting is disabled
    fn minter(&self) -> Option<Address>;
}

/// Wrapped-value holding facility used when a direct refund is not possible
#[odra::external_contract]
pub trait PaymentEscrow {
    /// Credit the attached value to `beneficiary`
    ///
    /// # Arguments
    /// * `beneficiary` - Address allowed to withdraw the deposit later
    fn deposit(&mut self, beneficiary: Address);

    /// Pay the caller's full balance out in native tokens
    fn withdraw(&mut self) -> U512;

    /// Balance waiting for `owner`
    fn balance_of(&self, owner: Address) -> U512;
}
