//! Login page posting email + password to the user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The outcome is only logged. Nothing on the page changes after a submit,
//! and repeated submits each send their own request.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::use_api_config;
use crate::net::error::ApiError;
use crate::net::types::LoginResponse;
use crate::state::login::Credentials;

#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn login_success_message(email: &str, response: &LoginResponse) -> String {
    let token = if response.access_token.is_some() { "issued" } else { "missing" };
    format!("Login succeeded for {email} (access token {token})")
}

/// Split failures into "the server said no" and "the request never landed".
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn login_failure_message(err: &ApiError) -> String {
    if err.is_status() {
        format!("Login failed, server error: {err}")
    } else {
        format!("Login failed, request error: {err}")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_api_config();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        log::info!("Login submitted: {}", credentials.email);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &credentials).await {
                    Ok(response) => log::info!("{}", login_success_message(&credentials.email, &response)),
                    Err(err) => log::error!("{}", login_failure_message(&err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, credentials);
    };

    view! {
        <div class="login-container">
            <h2>"로그인"</h2>
            <form on:submit=on_submit class="login-form">
                <div class="login-form-group">
                    <label for="email" class="login-label">"이메일:"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        required
                        class="login-input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="login-form-group">
                    <label for="password" class="login-label">"비밀번호:"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        required
                        class="login-input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="login-button">"로그인"</button>
            </form>
        </div>
    }
}
