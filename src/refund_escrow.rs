//! Refund escrow - CEP-18 wrapped CSPR holding displaced bids
//!
//! When a refund cannot be paid straight into the previous bidder's account,
//! the auction house attaches the amount to `deposit` and this contract mints
//! the same number of wrapped motes to the bidder. The bidder withdraws at any
//! time; balances never expire.

use odra::prelude::*;
use odra::casper_types::{U256, U512};
use odra_modules::cep18_token::Cep18;

use crate::errors::Error;
use crate::events::{EscrowDeposited, EscrowWithdrawn};

/// wCSPR - wrapped CSPR owed to refund beneficiaries
#[odra::module]
pub struct RefundEscrow {
    /// CEP-18 token implementation
    cep18: SubModule<Cep18>,
}

#[odra::module]
impl RefundEscrow {
    pub fn init(&mut self) {
        self.cep18.init(
            "wCSPR".to_string(),
            "Mosaics Refund CSPR".to_string(),
            9, // Same decimals as CSPR
            U256::zero(),
        );
    }

    /// Credit the attached CSPR to `beneficiary`
    ///
    /// Accepts any caller and any amount, so a funded deposit cannot fail.
    /// Amounts pass through u128, which holds far more than the total CSPR supply.
    #[odra(payable)]
    pub fn deposit(&mut self, beneficiary: Address) {
        let amount = self.env().attached_value();
        self.cep18.raw_mint(&beneficiary, &U256::from(amount.as_u128()));

        self.env().emit_event(EscrowDeposited {
            beneficiary,
            amount,
            total_balance: self.balance_of(beneficiary),
        });
    }

    /// Pay out the caller's whole balance and zero it
    pub fn withdraw(&mut self) -> U512 {
        let caller = self.env().caller();
        let balance = self.cep18.balance_of(&caller);
        if balance == U256::zero() {
            self.env().revert(Error::NothingToWithdraw);
        }

        // Burn BEFORE the native transfer
        self.cep18.raw_burn(&caller, &balance);

        let amount = U512::from(balance.as_u128());
        self.env().transfer_tokens(&caller, &amount);

        self.env().emit_event(EscrowWithdrawn {
            beneficiary: caller,
            amount,
        });

        amount
    }

    /// Withdrawable balance of `owner`, in motes
    pub fn balance_of(&self, owner: Address) -> U512 {
        U512::from(self.cep18.balance_of(&owner).as_u128())
    }

    /// Total CSPR currently held for beneficiaries
    pub fn total_supply(&self) -> U512 {
        U512::from(self.cep18.total_supply().as_u128())
    }

    pub fn name(&self) -> String {
        self.cep18.name()
    }

    pub fn symbol(&self) -> String {
        self.cep18.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.cep18.decimals()
    }
}
