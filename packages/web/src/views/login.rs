//! Login page view with email/password form.

use api::ApiError;
use dioxus::prelude::*;
use ui::{use_client, use_session};

use crate::Route;

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        ApiError::RequestFailed { message, .. } => message.clone(),
        _ => "Login failed. Please try again.".to_string(),
    }
}

#[component]
pub fn Login() -> Element {
    let state = use_session();
    let client = use_client();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to recommendations
    if state().is_logged_in() {
        nav.replace(Route::Recommendations {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&e, &p).await {
                Ok(_) => {
                    nav.replace(Route::Recommendations {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some(login_error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Sign in to WanderWise" }
            p { class: "auth-subtitle", "Continue your adventure with personalized recommendations" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
