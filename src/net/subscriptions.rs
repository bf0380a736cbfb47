//! Subscription endpoints.

use super::error::ApiError;
use super::http;
use super::types::{SubscriptionRequest, SubscriptionStatus};

pub async fn fetch_subscription() -> Result<SubscriptionStatus, ApiError> {
    http::get_json("/users/subscription/").await
}

pub async fn create_subscription(payment_method: &str) -> Result<SubscriptionStatus, ApiError> {
    let payload = SubscriptionRequest { payment_method: payment_method.to_owned() };
    http::post_json("/users/subscription/", &payload).await
}

pub async fn cancel_subscription() -> Result<(), ApiError> {
    http::delete("/users/subscription/").await
}
