//! Lot, image, and category endpoints.

use super::error::ApiError;
use super::http::{self, FormPayload};
use super::types::{Category, Lot, LotImage, LotRequest};

/// List lots, optionally filtered by query parameters.
pub async fn fetch_lots(params: &[(&str, &str)]) -> Result<Vec<Lot>, ApiError> {
    let mut path = String::from("/v1/lots/");
    for (i, (key, value)) in params.iter().enumerate() {
        path.push(if i == 0 { '?' } else { '&' });
        path.push_str(key);
        path.push('=');
        path.push_str(value);
    }
    http::get_json(&path).await
}

/// Lots belonging to one auction. The server-side filter has been seen
/// returning extraneous records; the lots store re-checks the result.
pub async fn fetch_lots_by_auction(auction_id: i64) -> Result<Vec<Lot>, ApiError> {
    http::get_json(&format!("/v1/lots/auction/{auction_id}/")).await
}

pub async fn fetch_lot(id: i64) -> Result<Lot, ApiError> {
    http::get_json(&format!("/v1/lots/{id}/")).await
}

pub async fn create_lot(payload: &LotRequest) -> Result<Lot, ApiError> {
    http::post_json("/v1/lots/", payload).await
}

pub async fn update_lot(id: i64, payload: &LotRequest) -> Result<Lot, ApiError> {
    http::put_json(&format!("/v1/lots/{id}/update/"), payload).await
}

pub async fn delete_lot(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/v1/lots/{id}/delete/")).await
}

/// Attach an image to a lot. The payload carries the `lot` id field and
/// the `image` file part (multipart).
pub async fn upload_image(payload: FormPayload) -> Result<LotImage, ApiError> {
    http::post_form("/lot-images/", payload).await
}

pub async fn delete_image(image_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/lot-images/{image_id}/")).await
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    http::get_json("/v1/categories/").await
}

/// Approve a pending lot. Returns the updated record for local patching.
pub async fn approve_lot(id: i64) -> Result<Lot, ApiError> {
    http::post_empty(&format!("/v1/lots/{id}/approve/")).await
}

/// Reject a pending lot. Returns the updated record for local patching.
pub async fn reject_lot(id: i64) -> Result<Lot, ApiError> {
    http::post_empty(&format!("/v1/lots/{id}/reject/")).await
}
