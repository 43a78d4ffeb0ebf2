//! Mosaics - Perpetual auction house for Casper Network
//!
//! This crate provides:
//! - One always-on English auction that mints and sells a new Mosaic each round
//! - Late-bid extension to deter sniping
//! - Outbid refunds that fall back to a wrapped-CSPR escrow instead of failing
//! - A pause interlock tied to the token's minting authority

#![no_std]

extern crate alloc;

pub mod auction_house;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod mosaics_token;
pub mod refund_escrow;

// Re-export main types for external use
pub use auction_house::{Auction, AuctionHouse};
pub use errors::*;
pub use events::*;
pub use mosaics_token::MosaicsToken;
pub use refund_escrow::RefundEscrow;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use auction_house::{AuctionHouseHostRef, AuctionHouseInitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use mosaics_token::{MosaicsTokenHostRef, MosaicsTokenInitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use refund_escrow::RefundEscrowHostRef;
