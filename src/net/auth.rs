//! Account and token endpoints.

use super::error::ApiError;
use super::http;
use super::types::{
    Charity, Credentials, RefreshRequest, RefreshResponse, RegisterRequest, RegisterResponse,
    TokenPair, User,
};

/// Submit a registration. Does not authenticate the user.
pub async fn register(payload: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    http::post_json("/users/register/", payload).await
}

/// Exchange credentials for an access/refresh pair.
pub async fn login(credentials: &Credentials) -> Result<TokenPair, ApiError> {
    http::post_json("/token/", credentials).await
}

/// Rotate the access token using the refresh token.
pub async fn refresh_token(refresh: &str) -> Result<RefreshResponse, ApiError> {
    http::post_json("/token/refresh/", &RefreshRequest { refresh: refresh.to_owned() }).await
}

/// Fetch the authenticated user's profile.
pub async fn fetch_profile() -> Result<User, ApiError> {
    http::get_json("/users/profile/").await
}

/// Direct lookup of the charity linked to the current user.
pub async fn fetch_user_charity() -> Result<Charity, ApiError> {
    http::get_json("/users/me/charity/").await
}

/// Full charity list; the session store scans it when the direct
/// lookup fails.
pub async fn fetch_charities() -> Result<Vec<Charity>, ApiError> {
    http::get_json("/charities/").await
}

/// Confirm an e-mail address with the token from the confirmation link.
pub async fn verify_email(token: &str) -> Result<RegisterResponse, ApiError> {
    http::get_json(&format!("/users/verify-email/?token={token}")).await
}
