use pingdom_client::error::{ApiError, PingdomError};
use reqwest::StatusCode;

#[test]
fn test_error_display_api() {
    let error = PingdomError::Api(ApiError {
        status_code: 403,
        status_desc: "Forbidden".to_string(),
        error_message: "Something went wrong!".to_string(),
    });
    assert_eq!(
        error.to_string(),
        "api error 403 Forbidden: Something went wrong!"
    );
}

#[test]
fn test_error_display_unexpected() {
    let error = PingdomError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let error: PingdomError = serde_error.into();

    assert!(error.to_string().starts_with("deserialization error"));
    match error {
        PingdomError::Json(_) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::other("test");
    let error: PingdomError = io_error.into();

    match error {
        PingdomError::Io(_) => (),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_api_error_decodes_from_envelope_payload() {
    let json = r#"{"statuscode": 401, "statusdesc": "Unauthorized", "errormessage": "Invalid application key"}"#;
    let error: ApiError = serde_json::from_str(json).unwrap();
    assert_eq!(error.status_code, 401);
    assert_eq!(error.status_desc, "Unauthorized");
    assert_eq!(error.error_message, "Invalid application key");
}
