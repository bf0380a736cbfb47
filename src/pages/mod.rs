//! Page components, one per route.

pub mod auction_detail;
pub mod auctions;
pub mod create_auction;
pub mod create_lot;
pub mod delivery;
pub mod home;
pub mod info;
pub mod login;
pub mod lot_detail;
pub mod payment;
pub mod profile;
pub mod register;
