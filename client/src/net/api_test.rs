use super::*;

#[test]
fn json_content_type_is_plain_json() {
    assert_eq!(JSON_CONTENT_TYPE, "application/json");
}

#[test]
fn parse_login_body_reads_access_token() {
    let resp = parse_login_body(r#"{"accessToken":"token-123"}"#);
    assert_eq!(resp.access_token.as_deref(), Some("token-123"));
}

#[test]
fn parse_login_body_tolerates_empty_body() {
    assert_eq!(parse_login_body(""), LoginResponse::default());
    assert_eq!(parse_login_body("OK"), LoginResponse::default());
}

#[test]
fn parse_board_list_reads_array() {
    let boards = parse_board_list(r#"[{"id":1,"title":"t","writer":"w","viewCount":5}]"#).unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].view_count, 5);
}

#[test]
fn parse_board_list_accepts_empty_array() {
    assert!(parse_board_list("[]").unwrap().is_empty());
}

#[test]
fn parse_board_list_rejects_object_body() {
    let err = parse_board_list(r#"{"boards":[]}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_outside_browser_are_unavailable() {
    let config = ApiConfig::new("http://localhost:8888", "");
    let creds = Credentials::new("a@b.com", "abcd");
    let login = futures::executor::block_on(login(&config, &creds));
    assert_eq!(login, Err(ApiError::Unavailable));
    let boards = futures::executor::block_on(fetch_boards(&config));
    assert_eq!(boards, Err(ApiError::Unavailable));
}
