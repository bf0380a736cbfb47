use super::*;

use chrono::TimeZone;
use chrono::Utc;

fn bid(id: i64, created_at: i64, is_winner: bool) -> Bid {
    Bid {
        id,
        lot: 1,
        amount: "100.00".to_owned(),
        created_at: Utc.timestamp_opt(created_at, 0).unwrap(),
        is_winner,
    }
}

fn winning(id: i64, status: PaymentStatus, delivery_status: Option<DeliveryStatus>) -> Winning {
    Winning {
        id,
        bid: None,
        lot: None,
        status,
        delivery_status,
        has_delivery: false,
        delivery: None,
        amount: None,
        created_at: None,
    }
}

fn details(city: &str) -> DeliveryDetails {
    DeliveryDetails { city: Some(city.to_owned()), ..DeliveryDetails::default() }
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn sorted_bids_newest_first() {
    let state = BidsState {
        bids: vec![bid(1, 100, false), bid(2, 300, false), bid(3, 200, false)],
        ..BidsState::default()
    };
    assert_eq!(state.sorted_bids().iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 3, 1]);
}

#[test]
fn won_bids_filters_winner_flag() {
    let state = BidsState {
        bids: vec![bid(1, 100, true), bid(2, 200, false), bid(3, 300, true)],
        ..BidsState::default()
    };
    assert_eq!(state.won_bids().iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn pending_payment_winnings_filters_status() {
    let state = BidsState {
        winnings: vec![
            winning(1, PaymentStatus::Pending, None),
            winning(2, PaymentStatus::Completed, None),
        ],
        ..BidsState::default()
    };
    assert_eq!(state.pending_payment_winnings().iter().map(|w| w.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn pending_confirmation_requires_paid_and_undelivered() {
    let state = BidsState {
        winnings: vec![
            winning(1, PaymentStatus::Completed, None),
            winning(2, PaymentStatus::Completed, Some(DeliveryStatus::Pending)),
            winning(3, PaymentStatus::Completed, Some(DeliveryStatus::Delivered)),
            winning(4, PaymentStatus::Pending, None),
        ],
        ..BidsState::default()
    };
    assert_eq!(
        state.pending_confirmation_winnings().iter().map(|w| w.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

// =============================================================
// Payment error normalization
// =============================================================

#[test]
fn already_paid_in_error_field_normalizes() {
    let err = ApiError::status(400, serde_json::json!({"error": "Лот уже оплачен ранее"}));
    assert_eq!(payment_error_message(&err), "Этот лот уже был оплачен ранее");
}

#[test]
fn already_paid_in_detail_field_normalizes() {
    let err = ApiError::status(400, serde_json::json!({"detail": "Ставка уже оплачена, лот уже оплачен"}));
    assert_eq!(payment_error_message(&err), "Этот лот уже был оплачен ранее");
}

#[test]
fn already_paid_anywhere_in_body_normalizes() {
    let err = ApiError::status(400, serde_json::json!({"meta": {"note": "этот лот уже оплачен кем-то"}}));
    assert_eq!(payment_error_message(&err), "Этот лот уже был оплачен ранее");
}

#[test]
fn server_message_passes_through_otherwise() {
    let err = ApiError::status(400, serde_json::json!({"detail": "Недостаточно средств"}));
    assert_eq!(payment_error_message(&err), "Недостаточно средств");
}

#[test]
fn unshaped_body_is_stringified() {
    let err = ApiError::status(500, serde_json::json!({"weird": 1}));
    assert_eq!(payment_error_message(&err), r#"{"weird":1}"#);
}

#[test]
fn empty_body_uses_payment_fallback() {
    let err = ApiError::status(500, serde_json::Value::Null);
    assert_eq!(payment_error_message(&err), "Ошибка при оплате выигрыша");
}

#[test]
fn network_failure_gets_connectivity_message() {
    assert_eq!(
        payment_error_message(&ApiError::Network),
        "Нет ответа от сервера. Проверьте соединение с интернетом."
    );
}

#[test]
fn local_failure_keeps_its_message() {
    let err = ApiError::local("Не указан ID ставки для оплаты");
    assert_eq!(payment_error_message(&err), "Не указан ID ставки для оплаты");
    assert_eq!(payment_error_message(&ApiError::local("")), "Неизвестная ошибка при оплате");
}

// =============================================================
// Delivery merge
// =============================================================

#[test]
fn delivery_merge_sets_record_and_flags() {
    let mut state = BidsState {
        winnings: vec![winning(5, PaymentStatus::Completed, None)],
        ..BidsState::default()
    };

    state.apply_delivery_details(5, &details("Москва"));

    let w = &state.winnings[0];
    assert_eq!(w.delivery.as_ref().unwrap().city.as_deref(), Some("Москва"));
    assert!(w.has_delivery);
    assert_eq!(w.delivery_status, Some(DeliveryStatus::Pending));
}

#[test]
fn delivery_merge_keeps_existing_fields() {
    let mut state = BidsState {
        winnings: vec![Winning {
            delivery: Some(DeliveryDetails {
                recipient: Some("Иван".to_owned()),
                ..DeliveryDetails::default()
            }),
            ..winning(5, PaymentStatus::Completed, None)
        }],
        ..BidsState::default()
    };

    state.apply_delivery_details(5, &details("Казань"));

    let merged = state.winnings[0].delivery.as_ref().unwrap();
    assert_eq!(merged.recipient.as_deref(), Some("Иван"));
    assert_eq!(merged.city.as_deref(), Some("Казань"));
}

#[test]
fn delivery_merge_does_not_downgrade_status() {
    let mut state = BidsState {
        winnings: vec![winning(5, PaymentStatus::Completed, Some(DeliveryStatus::Delivered))],
        ..BidsState::default()
    };
    state.apply_delivery_details(5, &details("Тверь"));
    assert_eq!(state.winnings[0].delivery_status, Some(DeliveryStatus::Delivered));
}

#[test]
fn delivery_merge_unknown_transaction_is_a_no_op() {
    let mut state = BidsState {
        winnings: vec![winning(5, PaymentStatus::Completed, None)],
        ..BidsState::default()
    };
    state.apply_delivery_details(99, &details("Омск"));
    assert!(state.winnings[0].delivery.is_none());
    assert!(!state.winnings[0].has_delivery);
}
