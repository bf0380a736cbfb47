//! Bid, transaction, and delivery endpoints.

use chrono::Utc;

use super::error::ApiError;
use super::http;
use super::types::{Bid, Delivery, DeliveryDetails, DeliveryRequest, PaymentRequest, Winning};

pub async fn fetch_user_bids() -> Result<Vec<Bid>, ApiError> {
    http::get_json("/bids/my_bids/").await
}

pub async fn fetch_lot_bids(lot_id: i64) -> Result<Vec<Bid>, ApiError> {
    http::get_json(&format!("/bids/by_lot/?lot_id={lot_id}")).await
}

pub async fn create_bid(lot_id: i64, amount: f64) -> Result<Bid, ApiError> {
    http::post_json("/bids/", &super::types::BidRequest { lot: lot_id, amount }).await
}

pub async fn fetch_user_winnings() -> Result<Vec<Winning>, ApiError> {
    http::get_json("/transactions/my_purchases/").await
}

pub async fn fetch_transaction(transaction_id: i64) -> Result<Winning, ApiError> {
    http::get_json(&format!("/transactions/{transaction_id}/")).await
}

/// Pay for a won lot. The timestamp defeats intermediary caching of the
/// payment POST.
pub async fn pay_for_winning(bid_id: &str, payment_method: &str) -> Result<Winning, ApiError> {
    let payload = PaymentRequest {
        payment_method: payment_method.to_owned(),
        timestamp: Utc::now().timestamp_millis(),
    };
    http::post_json(&format!("/bids/{bid_id}/pay/"), &payload).await
}

pub async fn save_delivery_details(
    transaction_id: i64,
    details: &DeliveryDetails,
) -> Result<Delivery, ApiError> {
    let payload = DeliveryRequest { transaction: transaction_id, details: details.clone() };
    http::post_json("/delivery/", &payload).await
}

pub async fn confirm_delivery(bid_id: i64) -> Result<Winning, ApiError> {
    http::post_empty(&format!("/bids/{bid_id}/confirm-delivery/")).await
}

pub async fn fetch_delivery_details(transaction_id: i64) -> Result<Delivery, ApiError> {
    http::get_json(&format!("/delivery/{transaction_id}/")).await
}
