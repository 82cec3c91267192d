use super::*;

#[test]
fn success_message_notes_issued_token() {
    let response = LoginResponse { access_token: Some("jwt".to_owned()) };
    assert_eq!(
        login_success_message("a@b.com", &response),
        "Login succeeded for a@b.com (access token issued)"
    );
}

#[test]
fn success_message_notes_missing_token() {
    assert_eq!(
        login_success_message("a@b.com", &LoginResponse::default()),
        "Login succeeded for a@b.com (access token missing)"
    );
}

#[test]
fn failure_message_for_error_status() {
    let err = ApiError::Status { status: 401, message: Some("Unauthorized".to_owned()) };
    assert_eq!(login_failure_message(&err), "Login failed, server error: server responded with 401: Unauthorized");
}

#[test]
fn failure_message_for_network_error() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(login_failure_message(&err), "Login failed, request error: request failed: Failed to fetch");
}
