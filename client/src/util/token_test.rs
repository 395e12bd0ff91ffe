use super::*;

fn jwt(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.signature")
}

// =============================================================
// Claims
// =============================================================

#[test]
fn decode_claims_reads_exp_and_ignores_other_claims() {
    let claims = decode_claims(&jwt(r#"{"sub":"steve","exp":1700000000}"#)).unwrap();
    assert_eq!(claims.exp, Some(1_700_000_000.0));
}

#[test]
fn decode_claims_tolerates_padding() {
    let padded = format!("{}==", jwt(r#"{"exp":1}"#).split('.').nth(1).unwrap());
    let token = format!("x.{padded}.y");
    assert_eq!(decode_claims(&token).unwrap().exp, Some(1.0));
}

#[test]
fn decode_claims_rejects_garbage() {
    assert!(decode_claims("not-a-jwt").is_err());
    assert!(decode_claims("a..c").is_err());
    assert!(decode_claims("a.!!!.c").is_err());
    assert!(decode_claims(&format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"))).is_err());
}

#[test]
fn missing_exp_never_expires() {
    let claims = Claims::default();
    assert!(!claims.is_expired(f64::MAX));
}

#[test]
fn expiry_is_strictly_before_now() {
    let claims = Claims { exp: Some(100.0) };
    assert!(!claims.is_expired(99.0));
    assert!(!claims.is_expired(100.0));
    assert!(claims.is_expired(100.5));
}

// =============================================================
// Restore decisions
// =============================================================

#[test]
fn no_stored_token_means_no_session() {
    assert_eq!(restore_decision(None, 0.0), RestoreDecision::NoSession);
}

#[test]
fn live_token_is_validated() {
    let token = jwt(r#"{"exp":2000}"#);
    assert_eq!(restore_decision(Some(token.clone()), 1000.0), RestoreDecision::Validate(token));
}

#[test]
fn expired_token_is_discarded() {
    assert_eq!(restore_decision(Some(jwt(r#"{"exp":1000}"#)), 2000.0), RestoreDecision::Discard);
}

#[test]
fn undecodable_token_is_discarded() {
    assert_eq!(restore_decision(Some("garbage".to_owned()), 0.0), RestoreDecision::Discard);
}
