//! Bids and winnings store.
//!
//! Payment is the touchiest flow in the app: the backend reports a
//! repeated payment in several inconsistent shapes, and users hit it
//! often enough that all of them must collapse into one clear message.
//! Delivery details are the one place that merges locally instead of
//! relying on the refetch alone.

#[cfg(test)]
#[path = "bids_test.rs"]
mod bids_test;

use leptos::prelude::*;

use crate::net;
use crate::net::error::ApiError;
use crate::net::types::{Bid, Delivery, DeliveryDetails, DeliveryStatus, PaymentStatus, Winning};

/// Substring the backend uses, in any of its error shapes, for a
/// repeated payment.
const ALREADY_PAID_NEEDLE: &str = "уже оплачен";
/// The one message all repeated-payment shapes normalize to.
const ALREADY_PAID_MESSAGE: &str = "Этот лот уже был оплачен ранее";

/// Collection state for the user's bids and winnings.
#[derive(Clone, Debug, Default)]
pub struct BidsState {
    pub bids: Vec<Bid>,
    pub winnings: Vec<Winning>,
    pub loading: bool,
    pub error: Option<String>,
    pub bid_success: bool,
    pub bid_message: String,
    pub payment_success: bool,
    pub delivery_success: bool,
    pub confirmation_success: bool,
}

impl BidsState {
    /// Bids newest-first.
    pub fn sorted_bids(&self) -> Vec<Bid> {
        let mut bids = self.bids.clone();
        bids.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bids
    }

    pub fn won_bids(&self) -> Vec<Bid> {
        self.bids.iter().filter(|bid| bid.is_winner).cloned().collect()
    }

    pub fn pending_payment_winnings(&self) -> Vec<Winning> {
        self.winnings.iter().filter(|w| w.status == PaymentStatus::Pending).cloned().collect()
    }

    pub fn pending_confirmation_winnings(&self) -> Vec<Winning> {
        self.winnings
            .iter()
            .filter(|w| {
                w.status == PaymentStatus::Completed
                    && w.delivery_status != Some(DeliveryStatus::Delivered)
            })
            .cloned()
            .collect()
    }

    /// Merge saved delivery details into the matching winning. Status
    /// defaults to pending when the backend has not set one yet.
    fn apply_delivery_details(&mut self, transaction_id: i64, details: &DeliveryDetails) {
        let Some(winning) = self.winnings.iter_mut().find(|w| w.id == transaction_id) else {
            return;
        };
        winning.delivery = Some(match winning.delivery.take() {
            Some(existing) => existing.merged_with(details),
            None => details.clone(),
        });
        winning.has_delivery = true;
        if winning.delivery_status.is_none() {
            winning.delivery_status = Some(DeliveryStatus::Pending);
        }
    }
}

/// Map a payment failure onto the message shown to the user.
///
/// Any server response mentioning the repeated-payment phrase — in the
/// extracted message or anywhere in the body — collapses to the fixed
/// message. Otherwise: the server's message, the raw body as a last
/// resort, or the kind-specific fallback.
fn payment_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, body, .. } => {
            if err.mentions(ALREADY_PAID_NEEDLE) {
                return ALREADY_PAID_MESSAGE.to_owned();
            }
            message
                .clone()
                .or_else(|| (!body.is_null()).then(|| body.to_string()))
                .unwrap_or_else(|| "Ошибка при оплате выигрыша".to_owned())
        }
        ApiError::Network => "Нет ответа от сервера. Проверьте соединение с интернетом.".to_owned(),
        ApiError::Local(message) if !message.is_empty() => message.clone(),
        ApiError::Local(_) => "Неизвестная ошибка при оплате".to_owned(),
    }
}

pub async fn fetch_user_bids(state: RwSignal<BidsState>) -> Option<Vec<Bid>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::bids::fetch_user_bids().await {
        Ok(bids) => {
            state.update(|s| s.bids = bids.clone());
            Some(bids)
        }
        Err(err) => {
            leptos::logging::warn!("user bids fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при получении ставок")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_lot_bids(state: RwSignal<BidsState>, lot_id: i64) -> Option<Vec<Bid>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::bids::fetch_lot_bids(lot_id).await {
        Ok(bids) => {
            state.update(|s| s.bids = bids.clone());
            Some(bids)
        }
        Err(err) => {
            leptos::logging::warn!("lot {lot_id} bids fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при получении ставок")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Place a bid, then refetch the user's bids.
pub async fn create_bid(state: RwSignal<BidsState>, lot_id: i64, amount: f64) -> Option<Bid> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.bid_success = false;
        s.bid_message = String::new();
    });

    let result = match net::bids::create_bid(lot_id, amount).await {
        Ok(bid) => {
            state.update(|s| {
                s.bid_success = true;
                s.bid_message = "Ставка успешно создана!".to_owned();
            });
            let _ = fetch_user_bids(state).await;
            Some(bid)
        }
        Err(err) => {
            leptos::logging::warn!("bid on lot {lot_id} failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при создании ставки")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_user_winnings(state: RwSignal<BidsState>) -> Option<Vec<Winning>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::bids::fetch_user_winnings().await {
        Ok(winnings) => {
            state.update(|s| s.winnings = winnings.clone());
            Some(winnings)
        }
        Err(err) => {
            leptos::logging::warn!("winnings fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при получении выигрышей")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_transaction_by_id(
    state: RwSignal<BidsState>,
    transaction_id: i64,
) -> Option<Winning> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::bids::fetch_transaction(transaction_id).await {
        Ok(winning) => Some(winning),
        Err(err) => {
            leptos::logging::warn!("transaction {transaction_id} fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при получении транзакции")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Pay for a won lot. The bid id comes from a route query parameter, so
/// it is validated before anything touches the network. Hard failure.
pub async fn pay_for_winning(
    state: RwSignal<BidsState>,
    bid_id: &str,
    payment_method: &str,
) -> Result<Winning, ApiError> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.payment_success = false;
    });

    let bid_id = bid_id.trim();
    let result = if bid_id.is_empty() {
        let err = ApiError::local("Не указан ID ставки для оплаты");
        state.update(|s| s.error = Some(err.to_string()));
        Err(err)
    } else {
        match net::bids::pay_for_winning(bid_id, payment_method).await {
            Ok(winning) => {
                state.update(|s| s.payment_success = true);
                let _ = fetch_user_winnings(state).await;
                Ok(winning)
            }
            Err(err) => {
                leptos::logging::warn!("payment for bid {bid_id} failed: {err}");
                let message = payment_error_message(&err);
                state.update(|s| s.error = Some(message));
                Err(err)
            }
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Save delivery details for a paid winning, refetch, and merge the
/// details into the matching record locally so the form reflects them
/// even when the refetch lags behind the write.
pub async fn save_delivery_details(
    state: RwSignal<BidsState>,
    transaction_id: i64,
    details: &DeliveryDetails,
) -> Option<Delivery> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.delivery_success = false;
    });

    let result = match net::bids::save_delivery_details(transaction_id, details).await {
        Ok(saved) => {
            state.update(|s| s.delivery_success = true);
            let _ = fetch_user_winnings(state).await;
            state.update(|s| s.apply_delivery_details(transaction_id, details));
            Some(saved)
        }
        Err(err) => {
            leptos::logging::warn!("delivery save for transaction {transaction_id} failed: {err}");
            state.update(|s| {
                s.error = Some(err.message_or("Ошибка при сохранении данных доставки"));
            });
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn confirm_delivery(state: RwSignal<BidsState>, bid_id: i64) -> Option<Winning> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.confirmation_success = false;
    });

    let result = match net::bids::confirm_delivery(bid_id).await {
        Ok(winning) => {
            state.update(|s| s.confirmation_success = true);
            let _ = fetch_user_winnings(state).await;
            Some(winning)
        }
        Err(err) => {
            leptos::logging::warn!("delivery confirmation for bid {bid_id} failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при подтверждении получения")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn get_delivery_details(
    state: RwSignal<BidsState>,
    transaction_id: i64,
) -> Option<Delivery> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::bids::fetch_delivery_details(transaction_id).await {
        Ok(delivery) => Some(delivery),
        Err(err) => {
            leptos::logging::warn!("delivery fetch for transaction {transaction_id} failed: {err}");
            state.update(|s| {
                s.error = Some(err.message_or("Ошибка при получении данных доставки"));
            });
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub fn reset_bid_state(state: RwSignal<BidsState>) {
    state.update(|s| {
        s.bid_success = false;
        s.bid_message = String::new();
    });
}

pub fn reset_payment_state(state: RwSignal<BidsState>) {
    state.update(|s| s.payment_success = false);
}

pub fn reset_delivery_state(state: RwSignal<BidsState>) {
    state.update(|s| s.delivery_success = false);
}

pub fn reset_confirmation_state(state: RwSignal<BidsState>) {
    state.update(|s| s.confirmation_success = false);
}
