//! Lots store.
//!
//! Two deviations from the plain fetch/refetch contract live here: the
//! per-auction fetch re-filters the response against the requested
//! auction id (the backend filter has returned foreign lots before),
//! and moderation splices the returned record into the collection and
//! the current slot instead of refetching.

#[cfg(test)]
#[path = "lots_test.rs"]
mod lots_test;

use leptos::prelude::*;

use crate::net;
use crate::net::error::ApiError;
use crate::net::http::FormPayload;
use crate::net::types::{Category, Lot, LotImage, LotRequest, LotStatus};

/// Validation message for a per-auction fetch without an auction id.
const MISSING_AUCTION_ID: &str = "Не указан ID аукциона";

/// Collection state for lots.
#[derive(Clone, Debug, Default)]
pub struct LotsState {
    pub lots: Vec<Lot>,
    pub current_lot: Option<Lot>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl LotsState {
    pub fn has_lots(&self) -> bool {
        !self.lots.is_empty()
    }

    pub fn active_lots(&self) -> Vec<Lot> {
        self.lots.iter().filter(|lot| lot.status == LotStatus::Active).cloned().collect()
    }

    pub fn lots_by_auction(&self, auction_id: i64) -> Vec<Lot> {
        self.lots.iter().filter(|lot| lot.auction == auction_id).cloned().collect()
    }

    /// Splice a moderated lot into the current slot and the collection.
    fn apply_moderated(&mut self, updated: Lot) {
        if self.current_lot.as_ref().is_some_and(|lot| lot.id == updated.id) {
            self.current_lot = Some(updated.clone());
        }
        if let Some(slot) = self.lots.iter_mut().find(|lot| lot.id == updated.id) {
            *slot = updated;
        }
    }
}

/// Keep only lots that really belong to the requested auction.
fn lots_matching_auction(lots: Vec<Lot>, auction_id: i64) -> Vec<Lot> {
    lots.into_iter().filter(|lot| lot.auction == auction_id).collect()
}

pub async fn fetch_lots(
    state: RwSignal<LotsState>,
    params: &[(&str, &str)],
) -> Option<Vec<Lot>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::fetch_lots(params).await {
        Ok(lots) => {
            state.update(|s| s.lots = lots.clone());
            Some(lots)
        }
        Err(err) => {
            leptos::logging::warn!("lot list fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при загрузке лотов")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Fetch the lots of one auction. A missing auction id short-circuits
/// with a validation error and an empty result before any network
/// call; responses are defensively re-filtered by auction id.
pub async fn fetch_lots_by_auction(
    state: RwSignal<LotsState>,
    auction_id: Option<i64>,
) -> Option<Vec<Lot>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match auction_id {
        None => {
            state.update(|s| s.error = Some(MISSING_AUCTION_ID.to_owned()));
            Some(Vec::new())
        }
        Some(id) => match net::lots::fetch_lots_by_auction(id).await {
            Ok(lots) => {
                let filtered = lots_matching_auction(lots, id);
                state.update(|s| s.lots = filtered.clone());
                Some(filtered)
            }
            Err(err) => {
                leptos::logging::warn!("lots fetch for auction {id} failed: {err}");
                state.update(|s| s.error = Some(err.message_or("Ошибка при загрузке лотов")));
                None
            }
        },
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_lot_by_id(state: RwSignal<LotsState>, id: i64) -> Option<Lot> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::fetch_lot(id).await {
        Ok(lot) => {
            state.update(|s| s.current_lot = Some(lot.clone()));
            Some(lot)
        }
        Err(err) => {
            leptos::logging::warn!("lot {id} fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при загрузке данных лота")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn create_lot(state: RwSignal<LotsState>, payload: &LotRequest) -> Option<Lot> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.success = false;
    });

    let result = match net::lots::create_lot(payload).await {
        Ok(lot) => {
            state.update(|s| s.success = true);
            Some(lot)
        }
        Err(err) => {
            state.update(|s| s.error = Some(err.message_or("Ошибка при создании лота")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn update_lot(
    state: RwSignal<LotsState>,
    id: i64,
    payload: &LotRequest,
) -> Option<Lot> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.success = false;
    });

    let result = match net::lots::update_lot(id, payload).await {
        Ok(lot) => {
            state.update(|s| s.success = true);
            Some(lot)
        }
        Err(err) => {
            leptos::logging::warn!("lot {id} update failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при обновлении лота")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn delete_lot(state: RwSignal<LotsState>, id: i64) -> bool {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.success = false;
    });

    let result = match net::lots::delete_lot(id).await {
        Ok(()) => {
            state.update(|s| s.success = true);
            true
        }
        Err(err) => {
            leptos::logging::warn!("lot {id} delete failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при удалении лота")));
            false
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Upload one image for a lot (multipart).
pub async fn upload_image(state: RwSignal<LotsState>, payload: FormPayload) -> Option<LotImage> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::upload_image(payload).await {
        Ok(image) => Some(image),
        Err(err) => {
            leptos::logging::warn!("image upload failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при загрузке изображения")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn delete_image(state: RwSignal<LotsState>, image_id: i64) -> bool {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::delete_image(image_id).await {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::warn!("image {image_id} delete failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при удалении изображения")));
            false
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_categories(state: RwSignal<LotsState>) -> Option<Vec<Category>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::fetch_categories().await {
        Ok(categories) => {
            state.update(|s| s.categories = categories.clone());
            Some(categories)
        }
        Err(err) => {
            leptos::logging::warn!("category fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при загрузке категорий")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Approve a pending lot and patch it into local state — no refetch.
/// Hard failure.
pub async fn approve_lot(state: RwSignal<LotsState>, id: i64) -> Result<Lot, ApiError> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::approve_lot(id).await {
        Ok(lot) => {
            state.update(|s| s.apply_moderated(lot.clone()));
            Ok(lot)
        }
        Err(err) => {
            state.update(|s| s.error = Some(err.message_or("Ошибка при одобрении лота")));
            Err(err)
        }
    };

    state.update(|s| s.loading = false);
    result
}

/// Reject a pending lot and patch it into local state — no refetch.
/// Hard failure.
pub async fn reject_lot(state: RwSignal<LotsState>, id: i64) -> Result<Lot, ApiError> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::lots::reject_lot(id).await {
        Ok(lot) => {
            state.update(|s| s.apply_moderated(lot.clone()));
            Ok(lot)
        }
        Err(err) => {
            leptos::logging::warn!("lot {id} reject failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при отклонении лота")));
            Err(err)
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub fn clear_current_lot(state: RwSignal<LotsState>) {
    state.update(|s| s.current_lot = None);
}

pub fn reset_success(state: RwSignal<LotsState>) {
    state.update(|s| s.success = false);
}
