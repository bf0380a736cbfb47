//! Auctions store.
//!
//! Mutations refetch the whole collection instead of merging locally —
//! an extra round trip per create/update/delete buys consistency with
//! whatever side effects the backend applied.

#[cfg(test)]
#[path = "auctions_test.rs"]
mod auctions_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::net;
use crate::net::error::ApiError;
use crate::net::http::FormPayload;
use crate::net::types::{Auction, AuctionEvent};

/// Collection state for auctions.
#[derive(Clone, Debug, Default)]
pub struct AuctionsState {
    pub auctions: Vec<Auction>,
    pub current_auction: Option<Auction>,
    pub auction_events: Vec<AuctionEvent>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuctionsState {
    pub fn has_auctions(&self) -> bool {
        !self.auctions.is_empty()
    }

    /// Auctions whose end date is still ahead of `now`.
    pub fn active_auctions(&self, now: DateTime<Utc>) -> Vec<Auction> {
        self.auctions.iter().filter(|a| a.end_date > now).cloned().collect()
    }
}

pub async fn fetch_auctions(state: RwSignal<AuctionsState>) -> Option<Vec<Auction>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::auctions::fetch_auctions().await {
        Ok(auctions) => {
            state.update(|s| s.auctions = auctions.clone());
            Some(auctions)
        }
        Err(err) => {
            leptos::logging::warn!("auction list fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при загрузке аукционов")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_auction_by_id(state: RwSignal<AuctionsState>, id: i64) -> Option<Auction> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::auctions::fetch_auction(id).await {
        Ok(auction) => {
            state.update(|s| s.current_auction = Some(auction.clone()));
            Some(auction)
        }
        Err(err) => {
            leptos::logging::warn!("auction {id} fetch failed: {err}");
            state.update(|s| {
                s.error = Some(err.message_or("Ошибка при загрузке данных аукциона"));
            });
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_auction_events(
    state: RwSignal<AuctionsState>,
    auction_id: i64,
) -> Option<Vec<AuctionEvent>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::auctions::fetch_auction_events(auction_id).await {
        Ok(events) => {
            state.update(|s| s.auction_events = events.clone());
            Some(events)
        }
        Err(err) => {
            leptos::logging::warn!("auction {auction_id} events fetch failed: {err}");
            state.update(|s| {
                s.error = Some(err.message_or("Ошибка при загрузке событий аукциона"));
            });
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Create an auction from a multipart form, then refetch the list.
/// Hard failure: the error is both recorded and returned so a wizard
/// can abort.
pub async fn create_auction(
    state: RwSignal<AuctionsState>,
    payload: FormPayload,
) -> Result<Auction, ApiError> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::auctions::create_auction(payload).await {
        Ok(created) => {
            let _ = fetch_auctions(state).await;
            Ok(created)
        }
        Err(err) => {
            let fallback = if err.http_status() == Some(400) {
                "Ошибка валидации формы"
            } else {
                "Ошибка при создании аукциона"
            };
            state.update(|s| s.error = Some(err.message_or(fallback)));
            Err(err)
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Update an auction, refetch the list, and patch the current record
/// if it is the one that changed. Hard failure.
pub async fn update_auction(
    state: RwSignal<AuctionsState>,
    id: i64,
    payload: FormPayload,
) -> Result<Auction, ApiError> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::auctions::update_auction(id, payload).await {
        Ok(updated) => {
            let _ = fetch_auctions(state).await;
            state.update(|s| {
                if s.current_auction.as_ref().is_some_and(|a| a.id == id) {
                    s.current_auction = Some(updated.clone());
                }
            });
            Ok(updated)
        }
        Err(err) => {
            state.update(|s| s.error = Some(err.message_or("Ошибка при обновлении аукциона")));
            Err(err)
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Delete an auction and refetch the list. Hard failure.
pub async fn delete_auction(state: RwSignal<AuctionsState>, id: i64) -> Result<(), ApiError> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::auctions::delete_auction(id).await {
        Ok(()) => {
            let _ = fetch_auctions(state).await;
            state.update(|s| {
                if s.current_auction.as_ref().is_some_and(|a| a.id == id) {
                    s.current_auction = None;
                    s.auction_events.clear();
                }
            });
            Ok(())
        }
        Err(err) => {
            state.update(|s| s.error = Some(err.message_or("Ошибка при удалении аукциона")));
            Err(err)
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub fn clear_current_auction(state: RwSignal<AuctionsState>) {
    state.update(|s| {
        s.current_auction = None;
        s.auction_events.clear();
    });
}
