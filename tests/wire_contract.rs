//! Pins the exact JSON the gateway receives, independent of how the screens
//! assemble it.  A field rename here is a breaking change on the wire.

use chrono::{TimeZone, Utc};
use serde_json::json;

use assessment_frontend::constants::{INPUT_SUBMIT_PATH, SIGNUP_PATH, SURVEY_SUBMIT_PATH};
use assessment_frontend::envelope::{
    build_chat_envelope_at, build_signup_envelope, build_survey_envelope,
};
use assessment_frontend::models::CompanyType;
use assessment_frontend::network::GatewayConfig;

#[test]
fn chat_envelope_wire_shape() {
    let at = Utc.with_ymd_and_hms(2026, 8, 25, 9, 30, 0).unwrap();
    let envelope = build_chat_envelope_at("hello", &["first".to_string()], at);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "currentInput": "hello",
            "timestamp": "2026-08-25T09:30:00.000Z",
            "inputHistory": ["first", "hello"],
            "totalInputs": 2
        })
    );
}

#[test]
fn survey_envelope_wire_shape() {
    let envelope = build_survey_envelope("test_user", CompanyType::Lme);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "user_id": "test_user",
            "company_type": "LME"
        })
    );
}

#[test]
fn signup_envelope_wire_shape() {
    let envelope = build_signup_envelope("alice", "4821", "").unwrap();
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "user_id": "alice",
            "user_pw": 4821,
            "company_id": null
        })
    );
}

#[test]
fn endpoint_urls_resolve_against_the_configured_base() {
    let config = GatewayConfig::resolve(Some("https://gw.example.com/"));
    assert_eq!(
        config.url(INPUT_SUBMIT_PATH),
        "https://gw.example.com/api/input"
    );
    assert_eq!(
        config.url(SURVEY_SUBMIT_PATH),
        "https://gw.example.com/api/survey"
    );
    assert_eq!(config.url(SIGNUP_PATH), "https://gw.example.com/signup");
}
