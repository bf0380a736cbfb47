//! Wire types for the marketplace REST API.
//!
//! Field shapes follow the backend's JSON: integer ids, lowercase role
//! and status strings, decimal amounts serialized as strings, RFC 3339
//! timestamps. Unknown status strings map to a catch-all variant so new
//! backend states don't break deserialization.

use chrono::{DateTime, Utc};

/// Account role. Decides which routes and actions are available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Buyer,
    Charity,
    Admin,
}

/// The authenticated user's profile record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    /// Linked charity profile, present for charity-role users.
    pub charity: Option<Charity>,
}

/// Owning user reference inside a charity record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharityOwner {
    pub id: i64,
}

/// A charity organization profile.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Charity {
    pub id: i64,
    pub name: String,
    pub ogrn: Option<String>,
    pub description: Option<String>,
    pub user: Option<CharityOwner>,
}

/// Access/refresh pair returned by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Login request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub role: String,
    /// Charity-role registrations carry the organization fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ogrn: Option<String>,
}

/// Registration response; the message is surfaced verbatim to the user.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RegisterResponse {
    pub message: Option<String>,
}

/// Refresh-token request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Rotated tokens; a new refresh token is only sometimes issued.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    pub refresh: Option<String>,
}

/// An auction run by a charity. "Active" is derived from `end_date`
/// against wall-clock time, never persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Auction {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: DateTime<Utc>,
    pub charity: Option<i64>,
    pub image: Option<String>,
}

/// A timeline event attached to an auction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuctionEvent {
    pub id: i64,
    pub auction: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A buyer's entitlement ticket for an auction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub auction: i64,
}

/// Ticket purchase request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TicketPurchaseRequest {
    pub auction: i64,
}

/// Response of the ticket access check.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TicketAccess {
    pub has_access: bool,
}

/// Lot category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Moderation/sale state of a lot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    #[default]
    Pending,
    Active,
    Approved,
    Rejected,
    Sold,
    #[serde(other)]
    Unknown,
}

/// An image attached to a lot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LotImage {
    pub id: i64,
    pub lot: i64,
    pub image: String,
}

/// An item up for bidding within an auction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lot {
    pub id: i64,
    /// Owning auction id. List responses are re-checked against this.
    pub auction: i64,
    /// Donor user id; edit and delete are offered to the owner only.
    pub donor: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<i64>,
    #[serde(default)]
    pub status: LotStatus,
    #[serde(default)]
    pub images: Vec<LotImage>,
    pub start_price: Option<String>,
    pub current_price: Option<String>,
}

/// Create/update request body for a lot.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct LotRequest {
    pub auction: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_price: Option<String>,
}

/// A bid placed on a lot. Amounts travel as decimal strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bid {
    pub id: i64,
    pub lot: i64,
    pub amount: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_winner: bool,
}

/// Bid creation request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct BidRequest {
    pub lot: i64,
    pub amount: f64,
}

/// Payment request for a won lot.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PaymentRequest {
    pub payment_method: String,
    pub timestamp: i64,
}

/// Payment state of a winning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Delivery state of a paid winning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    #[serde(other)]
    Unknown,
}

/// Delivery address details. All fields optional so a partial form
/// merges over an existing record the way the backend does.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryDetails {
    pub recipient: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub comment: Option<String>,
}

impl DeliveryDetails {
    /// Overlay `new` onto `self`, keeping existing values where the new
    /// record has none.
    pub fn merged_with(&self, new: &Self) -> Self {
        Self {
            recipient: new.recipient.clone().or_else(|| self.recipient.clone()),
            phone: new.phone.clone().or_else(|| self.phone.clone()),
            city: new.city.clone().or_else(|| self.city.clone()),
            address: new.address.clone().or_else(|| self.address.clone()),
            postal_code: new.postal_code.clone().or_else(|| self.postal_code.clone()),
            comment: new.comment.clone().or_else(|| self.comment.clone()),
        }
    }
}

/// A saved delivery record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Delivery {
    pub id: i64,
    pub transaction: i64,
    #[serde(flatten)]
    pub details: DeliveryDetails,
}

/// Delivery creation request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DeliveryRequest {
    pub transaction: i64,
    #[serde(flatten)]
    pub details: DeliveryDetails,
}

/// A transaction produced when a bid wins its lot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Winning {
    pub id: i64,
    pub bid: Option<Bid>,
    pub lot: Option<Lot>,
    #[serde(default)]
    pub status: PaymentStatus,
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(default)]
    pub has_delivery: bool,
    pub delivery: Option<DeliveryDetails>,
    pub amount: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Balance endpoint response. The amount is a decimal string.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct BalanceInfo {
    pub amount: String,
}

/// Top-up request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TopUpRequest {
    pub amount: f64,
}

/// Top-up response carrying the new balance.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TopUpResponse {
    pub balance: String,
}

/// One entry in the balance history.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BalanceEntry {
    pub id: i64,
    pub amount: String,
    pub operation: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Subscription state for the current user.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SubscriptionStatus {
    pub is_active: bool,
}

/// Subscription creation request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SubscriptionRequest {
    pub payment_method: String,
}
