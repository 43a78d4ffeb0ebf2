//! Test utilities and helpers for Mosaics auction house tests

#![allow(dead_code)]

pub mod contract_bidder;
pub mod reentrant_minter;

pub use contract_bidder::{ContractBidder, ContractBidderHostRef};
pub use reentrant_minter::{ReentrantMinter, ReentrantMinterHostRef};

use odra::casper_types::U512;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;

use mosaics::auction_house::{AuctionHouse, AuctionHouseHostRef, AuctionHouseInitArgs};
use mosaics::mosaics_token::{MosaicsToken, MosaicsTokenHostRef, MosaicsTokenInitArgs};
use mosaics::refund_escrow::{RefundEscrow, RefundEscrowHostRef};

/// Constants for testing (seconds / motes / percent)
pub const CSPR: u64 = 1_000_000_000; // 1 CSPR in motes (9 decimals)
pub const TIME_BUFFER: u64 = 15 * 60;
pub const RESERVE_PRICE: u64 = 2 * CSPR;
pub const MIN_INCREMENT_BID_PERCENTAGE: u8 = 5;
pub const DURATION: u64 = 60 * 60 * 24;

/// Deployed contracts plus the accounts used across tests
pub struct Fixture {
    pub env: HostEnv,
    pub auction_house: AuctionHouseHostRef,
    pub mosaics_token: MosaicsTokenHostRef,
    pub refund_escrow: RefundEscrowHostRef,
    pub admin: Address,
    pub treasury: Address,
    pub bidder_a: Address,
    pub bidder_b: Address,
}

/// Deploy token, escrow and a paused auction house wired as minter
pub fn setup() -> Fixture {
    let env = odra_test::env();

    let admin = env.get_account(0);
    let treasury = env.get_account(1);
    let bidder_a = env.get_account(2);
    let bidder_b = env.get_account(3);

    env.set_caller(admin);
    let mut mosaics_token = MosaicsToken::deploy(&env, MosaicsTokenInitArgs { admin });
    let refund_escrow = RefundEscrow::deploy(&env, NoArgs);
    let auction_house = deploy_auction_house(&env, mosaics_token.address(), refund_escrow.address(), treasury, admin);

    mosaics_token.set_minter(Some(auction_house.address()));

    Fixture {
        env,
        auction_house,
        mosaics_token,
        refund_escrow,
        admin,
        treasury,
        bidder_a,
        bidder_b,
    }
}

/// Same as `setup`, with auction #0 already open
pub fn setup_unpaused() -> Fixture {
    let mut fixture = setup();
    fixture.env.set_caller(fixture.admin);
    fixture.auction_house.unpause();
    fixture
}

pub fn deploy_auction_house(
    env: &HostEnv,
    mosaics_token: Address,
    escrow: Address,
    treasury: Address,
    admin: Address,
) -> AuctionHouseHostRef {
    AuctionHouse::deploy(
        env,
        AuctionHouseInitArgs {
            mosaics_token,
            escrow,
            treasury,
            admin,
            time_buffer: TIME_BUFFER,
            reserve_price: U512::from(RESERVE_PRICE),
            min_bid_increment_percentage: MIN_INCREMENT_BID_PERCENTAGE,
            duration: DURATION,
        },
    )
}

/// Deploy a contract that bids on behalf of its caller
pub fn deploy_contract_bidder(env: &HostEnv) -> ContractBidderHostRef {
    ContractBidder::deploy(env, NoArgs)
}

/// Current block time in seconds
pub fn now_secs(env: &HostEnv) -> u64 {
    env.block_time() / 1000
}

pub fn advance_secs(env: &HostEnv, secs: u64) {
    env.advance_block_time(secs * 1000);
}

pub fn motes(amount: u64) -> U512 {
    U512::from(amount)
}
