//! Balance store.
//!
//! The backend serializes amounts as decimal strings; they are coerced
//! to numbers here, once, so views only ever format.

#[cfg(test)]
#[path = "balance_test.rs"]
mod balance_test;

use leptos::prelude::*;

use crate::net;
use crate::net::types::{BalanceEntry, BalanceInfo, TopUpResponse};

/// Balance and top-up history for the current user.
#[derive(Clone, Debug, Default)]
pub struct BalanceState {
    /// `None` until the first successful fetch.
    pub balance: Option<f64>,
    pub history: Vec<BalanceEntry>,
    pub loading: bool,
    pub error: Option<String>,
    pub top_up_success: bool,
}

impl BalanceState {
    pub fn has_balance(&self) -> bool {
        self.balance.is_some()
    }

    /// Display string: two decimals with the ruble sign, or a loading
    /// placeholder.
    pub fn formatted_balance(&self) -> String {
        match self.balance {
            Some(amount) => format!("{amount:.2} ₽"),
            None => "Загрузка...".to_owned(),
        }
    }
}

/// Coerce a wire amount to a number. Unparseable input counts as zero.
fn coerce_amount(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

pub async fn fetch_balance(state: RwSignal<BalanceState>) -> Option<BalanceInfo> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::balance::fetch_balance().await {
        Ok(info) => {
            state.update(|s| s.balance = Some(coerce_amount(&info.amount)));
            Some(info)
        }
        Err(err) => {
            leptos::logging::warn!("balance fetch failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при получении баланса")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn top_up_balance(state: RwSignal<BalanceState>, amount: f64) -> Option<TopUpResponse> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
        s.top_up_success = false;
    });

    let result = match net::balance::top_up(amount).await {
        Ok(response) => {
            state.update(|s| {
                s.balance = Some(coerce_amount(&response.balance));
                s.top_up_success = true;
            });
            Some(response)
        }
        Err(err) => {
            leptos::logging::warn!("top-up failed: {err}");
            state.update(|s| s.error = Some(err.message_or("Ошибка при пополнении баланса")));
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub async fn fetch_history(state: RwSignal<BalanceState>) -> Option<Vec<BalanceEntry>> {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let result = match net::balance::fetch_history().await {
        Ok(history) => {
            state.update(|s| s.history = history.clone());
            Some(history)
        }
        Err(err) => {
            leptos::logging::warn!("balance history fetch failed: {err}");
            state.update(|s| {
                s.error = Some(err.message_or("Ошибка при получении истории баланса"));
            });
            None
        }
    };

    state.update(|s| s.loading = false);
    result
}

pub fn reset_top_up_success(state: RwSignal<BalanceState>) {
    state.update(|s| s.top_up_success = false);
}
