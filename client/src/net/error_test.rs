use super::*;

#[test]
fn network_error_display_mentions_request_failure() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
    assert!(!err.is_status());
}

#[test]
fn status_error_display_without_message() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.to_string(), "server responded with 401");
    assert!(err.is_status());
}

#[test]
fn status_error_display_with_message() {
    let err = ApiError::Status { status: 404, message: Some("사용자를 찾을 수 없습니다.".to_owned()) };
    assert_eq!(err.to_string(), "server responded with 404: 사용자를 찾을 수 없습니다.");
}

#[test]
fn from_status_body_reads_backend_error_shape() {
    let body = r#"{"timestamp":"2025-12-20T10:00:00","status":400,"error":"Bad Request","message":"이미 존재하는 사용자입니다."}"#;
    let err = ApiError::from_status_body(400, body);
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: Some("이미 존재하는 사용자입니다.".to_owned()) }
    );
}

#[test]
fn from_status_body_falls_back_to_reason_phrase() {
    let body = r#"{"status":500,"error":"Internal Server Error"}"#;
    let err = ApiError::from_status_body(500, body);
    assert_eq!(err, ApiError::Status { status: 500, message: Some("Internal Server Error".to_owned()) });
}

#[test]
fn from_status_body_ignores_non_json() {
    let err = ApiError::from_status_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}
