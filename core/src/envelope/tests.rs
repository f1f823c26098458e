use super::*;
use serde_json::{json, Value};

fn unwrapped(opts: EnvelopeOptions) -> EnvelopeOptions {
    opts.with_body_wrap(false)
}

// **STATUS TABLE TESTS**

#[test]
fn test_success_status_pair() {
    let rendered = success(EnvelopeOptions::new()).unwrap();
    let wrapped = rendered.as_wrapped().unwrap();
    assert_eq!(wrapped.status_code, 200);

    let rendered = success(unwrapped(EnvelopeOptions::new())).unwrap();
    assert_eq!(rendered.as_body().unwrap().status_result, ResultOutcome::Ok);
}

#[test]
fn test_created_status_pair() {
    let rendered = created(EnvelopeOptions::new().with_data(json!({"id": 1}))).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 201);

    let rendered = created(unwrapped(EnvelopeOptions::new().with_data(json!({"id": 1})))).unwrap();
    assert_eq!(rendered.as_body().unwrap().status_result, ResultOutcome::Ok);
}

#[test]
fn test_updated_and_update_or_create_status_pairs() {
    let rendered = updated(EnvelopeOptions::new().with_data(json!({"id": 2}))).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 200);

    let rendered = update_or_create(EnvelopeOptions::new().with_data(json!({"id": 2}))).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 200);
}

#[test]
fn test_not_found_status_pair() {
    let rendered = not_found(unwrapped(EnvelopeOptions::new())).unwrap();
    let body = rendered.as_body().unwrap();
    assert_eq!(body.status_result, ResultOutcome::NotFound);
    assert_eq!(body.data, Value::Null);

    let rendered = not_found(EnvelopeOptions::new()).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 404);
}

#[test]
fn test_error_default_and_custom_status() {
    let rendered = error(EnvelopeOptions::new()).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 400);

    let rendered =
        error(EnvelopeOptions::new().with_status_code(StatusCode::InternalServerError)).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 500);
}

#[test]
fn test_unauthorized_defaults() {
    let rendered = unauthorized(unwrapped(EnvelopeOptions::new())).unwrap();
    let body = rendered.as_body().unwrap();
    assert_eq!(body.status_result, ResultOutcome::Unauthorized);
    assert_eq!(body.message, "Unauthorized");

    let rendered = unauthorized(EnvelopeOptions::new()).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 401);
}

#[test]
fn test_redirect_default_status() {
    let rendered = redirect(EnvelopeOptions::new().with_redirect_to("/login")).unwrap();
    assert_eq!(rendered.as_wrapped().unwrap().status_code, 302);
}

#[test]
fn test_custom_full_override() {
    let rendered = custom(
        unwrapped(EnvelopeOptions::new())
            .with_status_code(StatusCode::Accepted)
            .with_status_result(ResultOutcome::Error)
            .with_message("queued")
            .with_count(7),
    )
    .unwrap();
    let body = rendered.as_body().unwrap();
    assert_eq!(body.status_result, ResultOutcome::Error);
    assert_eq!(body.message, "queued");
    assert_eq!(body.count, Some(7));
}

// **SERIALIZATION CONTRACT TESTS**

#[test]
fn test_wrapped_shape_has_exactly_status_code_and_body() {
    let rendered = success(EnvelopeOptions::new().with_data(json!({"a": 1}))).unwrap();
    let value = serde_json::to_value(&rendered).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("statusCode"));
    assert!(object["body"].is_string());
}

#[test]
fn test_wrap_round_trips_to_unwrapped_shape() {
    let opts = || {
        EnvelopeOptions::new()
            .with_data(json!({"user": "alice", "active": true}))
            .with_count(3)
            .with_message("success")
            .with_info(json!({"trace": "abc"}))
            .with_identity(json!("tenant-1"))
            .with_token("tok-123")
    };

    let wrapped = success(opts()).unwrap();
    let direct = success(opts().with_body_wrap(false)).unwrap();

    let parsed: EnvelopeBody =
        serde_json::from_str(&wrapped.as_wrapped().unwrap().body).unwrap();
    assert_eq!(&parsed, direct.as_body().unwrap());
}

#[test]
fn test_body_serializes_null_count_and_token_explicitly() {
    let rendered = success(EnvelopeOptions::new()).unwrap();
    let body: Value =
        serde_json::from_str(&rendered.as_wrapped().unwrap().body).unwrap();
    let object = body.as_object().unwrap();
    assert!(object.contains_key("count"));
    assert!(object["count"].is_null());
    assert!(object.contains_key("token"));
    assert!(object["token"].is_null());
}

#[test]
fn test_message_floor_is_empty_string() {
    let rendered = redirect(unwrapped(EnvelopeOptions::new())).unwrap();
    assert_eq!(rendered.as_body().unwrap().message, "");
}

// **REDIRECT PRESENCE TESTS**

#[test]
fn test_redirect_to_present_when_supplied() {
    let rendered = redirect(
        EnvelopeOptions::new()
            .with_status_code(StatusCode::MovedTemporarily)
            .with_redirect_to("/login"),
    )
    .unwrap();
    let body = &rendered.as_wrapped().unwrap().body;
    assert!(body.contains(r#""redirectTo":"/login""#));
}

#[test]
fn test_redirect_to_omitted_when_absent() {
    let rendered = redirect(EnvelopeOptions::new()).unwrap();
    assert!(!rendered.as_wrapped().unwrap().body.contains("redirectTo"));
}

#[test]
fn test_redirect_to_omitted_when_empty() {
    let rendered = redirect(EnvelopeOptions::new().with_redirect_to("")).unwrap();
    assert!(!rendered.as_wrapped().unwrap().body.contains("redirectTo"));
}

// **ERROR REDUCTION TESTS**

#[test]
fn test_message_bearing_error_keeps_message_only() {
    let rendered = error(
        unwrapped(EnvelopeOptions::new())
            .with_error(json!({"message": "x", "stack": "trace..."})),
    )
    .unwrap();
    assert_eq!(rendered.as_body().unwrap().error, json!("x"));
}

#[test]
fn test_opaque_error_serialized_wholesale() {
    let rendered =
        error(unwrapped(EnvelopeOptions::new()).with_error(json!({"code": 5}))).unwrap();
    assert_eq!(rendered.as_body().unwrap().error, json!(r#"{"code":5}"#));
}

#[test]
fn test_string_error_serialized_wholesale() {
    let rendered =
        error(unwrapped(EnvelopeOptions::new()).with_error(json!("boom"))).unwrap();
    assert_eq!(rendered.as_body().unwrap().error, json!(r#""boom""#));
}

#[test]
fn test_empty_message_field_still_reduces_to_message() {
    let rendered = error(
        unwrapped(EnvelopeOptions::new()).with_error(json!({"message": "", "code": 5})),
    )
    .unwrap();
    assert_eq!(rendered.as_body().unwrap().error, json!(""));
}

#[test]
fn test_null_error_stays_null() {
    let rendered = error(unwrapped(EnvelopeOptions::new())).unwrap();
    assert_eq!(rendered.as_body().unwrap().error, Value::Null);
}

#[test]
fn test_error_value_wraps_rust_errors() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    let rendered =
        error(unwrapped(EnvelopeOptions::new()).with_error(error_value(&io_err))).unwrap();
    assert_eq!(rendered.as_body().unwrap().error, json!("disk gone"));
}

// **PASSTHROUGH METADATA TESTS**

#[test]
fn test_info_and_identity_pass_through_uninterpreted() {
    let rendered = success(
        unwrapped(EnvelopeOptions::new())
            .with_info(json!({"region": "eu-west-1"}))
            .with_identity(json!({"sub": "u-42"})),
    )
    .unwrap();
    let body = rendered.as_body().unwrap();
    assert_eq!(body.info, json!({"region": "eu-west-1"}));
    assert_eq!(body.identity, json!({"sub": "u-42"}));
}

#[test]
fn test_token_carried_unchanged() {
    let rendered =
        success(unwrapped(EnvelopeOptions::new()).with_token("jwt.abc.def")).unwrap();
    assert_eq!(
        rendered.as_body().unwrap().token.as_deref(),
        Some("jwt.abc.def")
    );
}

#[test]
fn test_status_code_values() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::MovedTemporarily.as_u16(), 302);
    assert_eq!(StatusCode::TemporaryRedirect.as_u16(), 307);
    assert_eq!(StatusCode::BadGateway.as_u16(), 502);
}

#[test]
fn test_result_outcome_wire_names() {
    assert_eq!(serde_json::to_string(&ResultOutcome::Ok).unwrap(), r#""Ok""#);
    assert_eq!(
        serde_json::to_string(&ResultOutcome::NeedRedirect).unwrap(),
        r#""NeedRedirect""#
    );
}
