use super::*;

// =============================================================
// Message extraction precedence
// =============================================================

#[test]
fn detail_field_wins() {
    let err = ApiError::status(400, serde_json::json!({"detail": "d", "error": "e"}));
    assert_eq!(err.message_or("fallback"), "d");
}

#[test]
fn error_field_when_no_detail() {
    let err = ApiError::status(400, serde_json::json!({"error": "e"}));
    assert_eq!(err.message_or("fallback"), "e");
}

#[test]
fn validation_map_concatenates_one_line_per_field() {
    let err = ApiError::status(
        400,
        serde_json::json!({
            "end_date": ["required"],
            "title": ["too short", "too plain"]
        }),
    );
    let message = err.message_or("fallback");
    assert!(message.contains("end_date: required"));
    assert!(message.contains("title: too short, too plain"));
    assert_eq!(message.lines().count(), 2);
}

#[test]
fn fallback_when_body_has_no_known_shape() {
    let err = ApiError::status(500, serde_json::json!("oops"));
    assert_eq!(err.message_or("fallback"), "fallback");

    let err = ApiError::status(500, serde_json::Value::Null);
    assert_eq!(err.message_or("fallback"), "fallback");
}

#[test]
fn network_and_local_always_use_fallback() {
    assert_eq!(ApiError::Network.message_or("f"), "f");
    assert_eq!(ApiError::local("boom").message_or("f"), "f");
}

// =============================================================
// Kind accessors
// =============================================================

#[test]
fn http_status_only_for_server_responses() {
    assert_eq!(ApiError::status(404, serde_json::Value::Null).http_status(), Some(404));
    assert_eq!(ApiError::Network.http_status(), None);
    assert_eq!(ApiError::local("x").http_status(), None);
}

#[test]
fn unauthorized_detection() {
    assert!(ApiError::status(401, serde_json::Value::Null).is_unauthorized());
    assert!(!ApiError::status(403, serde_json::Value::Null).is_unauthorized());
    assert!(!ApiError::Network.is_unauthorized());
}

// =============================================================
// Substring probes
// =============================================================

#[test]
fn mentions_checks_extracted_message() {
    let err = ApiError::status(400, serde_json::json!({"detail": "уже оплачен"}));
    assert!(err.mentions("уже оплачен"));
}

#[test]
fn mentions_checks_raw_body_fields() {
    let err = ApiError::status(400, serde_json::json!({"nested": {"note": "Лот уже оплачен ранее"}}));
    assert!(err.mentions("уже оплачен"));
}

#[test]
fn mentions_false_for_network() {
    assert!(!ApiError::Network.mentions("уже оплачен"));
}

#[test]
fn display_uses_extracted_message() {
    let err = ApiError::status(400, serde_json::json!({"detail": "bad"}));
    assert_eq!(err.to_string(), "bad");
    assert_eq!(ApiError::local("stop").to_string(), "stop");
}
