//! Livenet deployment script for the Mosaics contracts
//!
//! Deploys MosaicsToken, RefundEscrow and AuctionHouse, hands minting
//! authority to the auction house and opens auction #0.
//!
//! Run with: cargo run --bin deploy_livenet --features livenet --release

use std::str::FromStr;

use odra::casper_types::U512;
use odra::host::Deployer;
use odra::prelude::{Address, Addressable};
use mosaics::{
    AuctionHouse, AuctionHouseInitArgs, MosaicsToken, MosaicsTokenInitArgs, RefundEscrow,
};

// Defaults: 15 min buffer, 5% increment, 24 h rounds
const DEFAULT_TIME_BUFFER: u64 = 15 * 60; // 15 minutes
const DEFAULT_RESERVE_PRICE: u64 = 1; // 1 mote
const DEFAULT_MIN_INCREMENT_BID_PERCENTAGE: u8 = 5;
const DEFAULT_DURATION: u64 = 24 * 60 * 60; // 24 hours

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer and admin
    let deployer = env.caller();
    println!("Deployer address: {}", deployer.to_string());

    let treasury = std::env::var("TREASURY_ADDRESS")
        .map(|hash| Address::from_str(&hash).expect("Invalid treasury address"))
        .unwrap_or(deployer);
    println!("Treasury: {}", treasury.to_string());

    let time_buffer = env_or("AUCTION_TIME_BUFFER", DEFAULT_TIME_BUFFER);
    let reserve_price = U512::from(env_or("AUCTION_RESERVE_PRICE", DEFAULT_RESERVE_PRICE));
    let min_bid_increment_percentage = env_or(
        "AUCTION_MIN_INCREMENT_BID_PERCENTAGE",
        DEFAULT_MIN_INCREMENT_BID_PERCENTAGE,
    );
    let duration = env_or("AUCTION_DURATION", DEFAULT_DURATION);
    println!(
        "Auction config: buffer={}s reserve={} increment={}% duration={}s",
        time_buffer, reserve_price, min_bid_increment_percentage, duration
    );

    // Step 1: Token with deployer as admin, minter unset
    println!("\n=== Deploying MosaicsToken ===");
    env.set_gas(200_000_000_000u64); // 200 CSPR gas
    let mut mosaics_token = MosaicsToken::deploy(&env, MosaicsTokenInitArgs { admin: deployer });
    println!("MosaicsToken deployed at: {}", mosaics_token.address().to_string());

    // Step 2: Refund escrow (CEP-18 needs more gas)
    println!("\n=== Deploying RefundEscrow ===");
    env.set_gas(250_000_000_000u64); // 250 CSPR gas
    let refund_escrow = RefundEscrow::deploy(&env, odra::host::NoArgs);
    println!("RefundEscrow deployed at: {}", refund_escrow.address().to_string());

    // Step 3: Auction house, starts paused
    println!("\n=== Deploying AuctionHouse ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas
    let mut auction_house = AuctionHouse::deploy(
        &env,
        AuctionHouseInitArgs {
            mosaics_token: mosaics_token.address(),
            escrow: refund_escrow.address(),
            treasury,
            admin: deployer,
            time_buffer,
            reserve_price,
            min_bid_increment_percentage,
            duration,
        },
    );
    println!("AuctionHouse deployed at: {}", auction_house.address().to_string());

    // Step 4: Hand minting authority to the auction house
    println!("\n=== Setting AuctionHouse as minter ===");
    env.set_gas(5_000_000_000u64); // 5 CSPR gas
    mosaics_token.set_minter(Some(auction_house.address()));

    // Step 5: Open auction #0
    println!("\n=== Unpausing AuctionHouse ===");
    env.set_gas(15_000_000_000u64); // 15 CSPR gas
    auction_house.unpause();

    // Verify deployment
    println!("\n=== Deployment Summary ===");
    println!("MosaicsToken: {}", mosaics_token.address().to_string());
    println!("RefundEscrow: {}", refund_escrow.address().to_string());
    println!("AuctionHouse: {}", auction_house.address().to_string());
    println!("Admin: {}", deployer.to_string());
    println!("Current auction: {:?}", auction_house.get_auction());
    println!("\nDeployment complete!");
}
