//! Registration page view: account fields plus travel preferences.

use api::{ApiError, RegisterRequest};
use dioxus::prelude::*;
use ui::{use_client, use_session};

use crate::Route;

const SEASONS: [&str; 5] = ["Spring", "Summer", "Autumn", "Winter", "Monsoon"];

#[component]
pub fn Register() -> Element {
    let state = use_session();
    let client = use_client();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut preferred_season = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if state().is_logged_in() {
        nav.replace(Route::Recommendations {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                name: n,
                email: e,
                password: p,
                interests: interests().trim().to_string(),
                budget: budget().trim().parse().ok(),
                preferred_season: preferred_season(),
            };
            match client.register(&request).await {
                Ok(()) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    loading.set(false);
                    let message = match err {
                        ApiError::RequestFailed { message, .. } => message,
                        _ => "Registration failed. Please try again.".to_string(),
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create your account" }
            p { class: "auth-subtitle", "Tell us what you love and we'll match the destinations" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
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

                input {
                    r#type: "text",
                    placeholder: "Interests (e.g. trekking, lakes, culture)",
                    value: interests(),
                    oninput: move |evt| interests.set(evt.value()),
                }

                input {
                    r#type: "number",
                    placeholder: "Budget in NPR",
                    value: budget(),
                    oninput: move |evt| budget.set(evt.value()),
                }

                select {
                    value: preferred_season(),
                    onchange: move |evt| preferred_season.set(evt.value()),
                    option { value: "", "Preferred season" }
                    for season in SEASONS {
                        option { key: "{season}", value: "{season}", "{season}" }
                    }
                }

                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
