//! Auction and ticket endpoints.
//!
//! Create and update carry an image attachment, so they are multipart;
//! everything else is JSON.

use super::error::ApiError;
use super::http::{self, FormPayload};
use super::types::{Auction, AuctionEvent, Ticket, TicketAccess, TicketPurchaseRequest};

pub async fn fetch_auctions() -> Result<Vec<Auction>, ApiError> {
    http::get_json("/v1/auctions/").await
}

pub async fn fetch_auction(id: i64) -> Result<Auction, ApiError> {
    http::get_json(&format!("/v1/auctions/{id}/")).await
}

pub async fn fetch_auction_events(auction_id: i64) -> Result<Vec<AuctionEvent>, ApiError> {
    http::get_json(&format!("/auction-events/?auction={auction_id}")).await
}

pub async fn create_auction(payload: FormPayload) -> Result<Auction, ApiError> {
    http::post_form("/v1/auctions/create/", payload).await
}

pub async fn update_auction(id: i64, payload: FormPayload) -> Result<Auction, ApiError> {
    http::put_form(&format!("/v1/auctions/{id}/update/"), payload).await
}

pub async fn delete_auction(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/v1/auctions/{id}/delete/")).await
}

/// Buy an entitlement ticket for an auction.
pub async fn purchase_ticket(auction_id: i64) -> Result<Ticket, ApiError> {
    http::post_json("/v1/auctions/tickets/purchase/", &TicketPurchaseRequest { auction: auction_id })
        .await
}

/// Check whether the current user may bid in an auction.
pub async fn check_ticket_access(auction_id: i64) -> Result<TicketAccess, ApiError> {
    http::get_json(&format!("/v1/auctions/tickets/check-access/?auction_id={auction_id}")).await
}

/// The current buyer's tickets, fetched best-effort after login.
///
/// Lives outside the `/v1` prefix; the backend exposes it on the legacy
/// path only.
pub async fn fetch_my_tickets() -> Result<Vec<Ticket>, ApiError> {
    http::get_json("/auctions/tickets/").await
}
