//! REST layer: one request-builder module per resource family over a
//! shared transport helper.
//!
//! DESIGN
//! ======
//! Clients are pure request construction: fixed verb and path per
//! operation, JSON bodies except the file-bearing auction/lot-image
//! operations which use multipart. Failures come back as the tagged
//! [`error::ApiError`]; stores turn those into user-facing messages.

pub mod auctions;
pub mod auth;
pub mod balance;
pub mod bids;
pub mod error;
pub mod http;
pub mod lots;
pub mod subscriptions;
pub mod types;
