//! Smoke test for a deployed auction house on localnet
//!
//! Reads the live auction and places the minimum valid bid on it.

use std::str::FromStr;

use odra::host::HostRefLoader;
use odra::prelude::Address;
use mosaics::{AuctionHouse, RefundEscrow};

fn main() {
    let env = odra_casper_livenet_env::env();
    let caller = env.caller();

    println!("=== Testing Deployed AuctionHouse ===\n");
    println!("Caller: {}", caller.to_string());

    let auction_house_address = std::env::var("AUCTION_HOUSE_ADDRESS")
        .expect("AUCTION_HOUSE_ADDRESS env var must be set");
    let escrow_address = std::env::var("REFUND_ESCROW_ADDRESS")
        .expect("REFUND_ESCROW_ADDRESS env var must be set");

    let auction_house_addr =
        Address::from_str(&auction_house_address).expect("Invalid AuctionHouse address");
    let escrow_addr = Address::from_str(&escrow_address).expect("Invalid RefundEscrow address");

    let mut auction_house = AuctionHouse::load(&env, auction_house_addr);
    let refund_escrow = RefundEscrow::load(&env, escrow_addr);

    // Test 1: Read basic view functions
    println!("\n--- Test 1: View Functions ---");
    println!("Is Paused: {}", auction_house.is_paused());
    println!("Time buffer: {}s", auction_house.get_time_buffer());
    println!("Reserve price: {:?}", auction_house.get_reserve_price());
    println!("Min increment: {}%", auction_house.get_min_bid_increment_percentage());
    println!("Duration: {}s", auction_house.get_duration());

    let auction = match auction_house.get_auction() {
        Some(auction) => auction,
        None => {
            println!("No auction has been created yet - unpause the house first");
            return;
        }
    };
    println!("Current auction: {:?}", auction);

    // Test 2: Place the minimum valid bid
    println!("\n--- Test 2: Bidding ---");
    let minimum = match auction_house.minimum_bid() {
        Some(minimum) => minimum,
        None => {
            println!("Auction #{} is no longer taking bids", auction.mosaic_id);
            return;
        }
    };
    env.set_gas(15_000_000_000u64); // 15 CSPR gas
    println!("Bidding {} motes on mosaic #{}", minimum, auction.mosaic_id);
    auction_house.with_tokens(minimum).create_bid(auction.mosaic_id);

    println!("\n--- After Bidding ---");
    println!("Current auction: {:?}", auction_house.get_auction());
    println!("My escrow balance: {:?}", refund_escrow.balance_of(caller));

    println!("\n=== All Tests Passed! ===");
}
