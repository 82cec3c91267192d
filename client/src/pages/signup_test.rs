use super::*;

#[test]
fn log_line_carries_email_and_password_as_json() {
    let credentials = Credentials::new("user@example.com", "abcd");
    assert_eq!(
        signup_log_line(&credentials),
        r#"Signup submitted: {"email":"user@example.com","password":"abcd"}"#
    );
}

#[test]
fn valid_form_reaches_log_line() {
    let form = SignupForm {
        email: "user@example.com".to_owned(),
        password: "abcd".to_owned(),
        confirm_password: "abcd".to_owned(),
    };
    let credentials = form.validate_submit(form.password_error()).unwrap();
    assert!(signup_log_line(&credentials).contains(r#""password":"abcd""#));
}
