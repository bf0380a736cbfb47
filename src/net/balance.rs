//! Balance endpoints.

use super::error::ApiError;
use super::http;
use super::types::{BalanceEntry, BalanceInfo, TopUpRequest, TopUpResponse};

pub async fn fetch_balance() -> Result<BalanceInfo, ApiError> {
    http::get_json("/users/balance/").await
}

pub async fn top_up(amount: f64) -> Result<TopUpResponse, ApiError> {
    http::post_json("/users/balance/top-up/", &TopUpRequest { amount }).await
}

pub async fn fetch_history() -> Result<Vec<BalanceEntry>, ApiError> {
    http::get_json("/users/balance/history/").await
}
