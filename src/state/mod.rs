//! Shared client-side state stores.
//!
//! DESIGN
//! ======
//! One store per domain, each an `RwSignal<…State>` provided via
//! context from the app root. Actions are free async functions over the
//! signal and all follow the same contract: set `loading`, clear
//! `error`, run the request(s), record state on success or a
//! human-readable message on failure, and always drop `loading` at the
//! end. Mutations refetch their collection unless noted otherwise.

pub mod auctions;
pub mod balance;
pub mod bids;
pub mod lots;
pub mod session;
