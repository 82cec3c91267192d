//! Signup page with live password validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! No request is sent. A valid submit is logged; an invalid one is stopped
//! with a blocking alert.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::login::Credentials;
use crate::state::signup::{SignupForm, error_message, password_error};
use crate::util::dialog::alert;

fn signup_log_line(credentials: &Credentials) -> String {
    let body = serde_json::to_string(credentials).unwrap_or_else(|_| format!("{credentials:?}"));
    format!("Signup submitted: {body}")
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Recomputed whenever either password field changes.
    let validation_error = Memo::new(move |_| password_error(&password.get(), &confirm_password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match form.validate_submit(validation_error.get_untracked()) {
            Ok(credentials) => log::info!("{}", signup_log_line(&credentials)),
            Err(err) => alert(&err.to_string()),
        }
    };

    view! {
        <div class="signup-container">
            <h2>"회원가입"</h2>
            <form on:submit=on_submit class="signup-form">
                <div class="signup-form-group">
                    <label for="email" class="signup-label">"이메일:"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        required
                        class="signup-input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="signup-form-group">
                    <label for="password" class="signup-label">"비밀번호:"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="new-password"
                        required
                        class="signup-input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="signup-form-group">
                    <label for="confirmPassword" class="signup-label">"비밀번호 확인:"</label>
                    <input
                        type="password"
                        id="confirmPassword"
                        name="confirmPassword"
                        autocomplete="new-password"
                        required
                        class="signup-input"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || validation_error.get().is_some()>
                    <p class="signup-error-message">{move || error_message(validation_error.get())}</p>
                </Show>
                <button type="submit" class="signup-button">"회원가입"</button>
            </form>
        </div>
    }
}
