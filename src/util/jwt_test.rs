use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::TimeZone;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decodes_exp_and_user_id() {
    let token = token_with_payload(&serde_json::json!({"exp": 4_102_444_800_i64, "user_id": 7}));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.exp, 4_102_444_800);
    assert_eq!(claims.user_id, Some(7));
}

#[test]
fn user_id_is_optional() {
    let token = token_with_payload(&serde_json::json!({"exp": 10}));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.user_id, None);
}

#[test]
fn rejects_wrong_segment_count() {
    assert!(decode_claims("only-one-segment").is_none());
    assert!(decode_claims("a.b").is_none());
    assert!(decode_claims("a.b.c.d").is_none());
}

#[test]
fn rejects_non_base64_payload() {
    assert!(decode_claims("aGVhZGVy.!!!not-base64!!!.c2ln").is_none());
}

#[test]
fn rejects_payload_without_exp() {
    let token = token_with_payload(&serde_json::json!({"user_id": 1}));
    assert!(decode_claims(&token).is_none());
}

#[test]
fn tolerates_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let body = base64::engine::general_purpose::URL_SAFE
        .encode(serde_json::json!({"exp": 99}).to_string().as_bytes());
    let claims = decode_claims(&format!("{header}.{body}.sig")).expect("claims");
    assert_eq!(claims.exp, 99);
}

// =============================================================
// TokenClaims::is_expired
// =============================================================

#[test]
fn expired_when_now_reaches_exp() {
    let claims = TokenClaims { exp: 1_000, user_id: None };
    let before = chrono::Utc.timestamp_opt(999, 0).unwrap();
    let at = chrono::Utc.timestamp_opt(1_000, 0).unwrap();
    assert!(!claims.is_expired(before));
    assert!(claims.is_expired(at));
}
