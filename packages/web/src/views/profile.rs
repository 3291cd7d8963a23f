//! Own-profile editor: identity fields plus travel preferences.

use api::UpdateUserRequest;
use dioxus::prelude::*;
use ui::{use_client, use_session};

use crate::Route;

const SEASONS: [&str; 5] = ["Spring", "Summer", "Autumn", "Winter", "Monsoon"];

#[component]
pub fn Profile() -> Element {
    let state = use_session();
    let client = use_client();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut preferred_season = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| Option::<(bool, String)>::None);

    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            let Some(user_id) = client.session().user_id() else {
                return;
            };
            match client.user(&user_id).await {
                Ok(profile) => {
                    name.set(profile.name);
                    email.set(profile.email);
                    interests.set(profile.interests);
                    budget.set(profile.budget.map(|b| b.to_string()).unwrap_or_default());
                    preferred_season.set(profile.preferred_season);
                }
                Err(err) if err.is_unauthorized() => {
                    client.session().clear_session();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to load profile: {err}");
                    message.set(Some((false, "Failed to load your profile".to_string())));
                }
            }
            loading.set(false);
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            message.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            if n.is_empty() || e.is_empty() {
                message.set(Some((false, "Name and email are required".to_string())));
                return;
            }

            saving.set(true);
            let Some(user_id) = client.session().user_id() else {
                saving.set(false);
                return;
            };
            let p = password();
            let request = UpdateUserRequest {
                name: Some(n),
                email: Some(e),
                password: (!p.is_empty()).then_some(p),
                interests: Some(interests().trim().to_string()),
                budget: budget().trim().parse().ok(),
                preferred_season: Some(preferred_season()),
            };
            match client.update_user(&user_id, &request).await {
                Ok(()) => {
                    password.set(String::new());
                    message.set(Some((true, "Profile updated".to_string())));
                }
                Err(err) => {
                    tracing::error!("failed to update profile: {err}");
                    message.set(Some((false, "Failed to update profile".to_string())));
                }
            }
            saving.set(false);
        });
    };

    if !state().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading your profile..." }
        };
    }

    rsx! {
        div {
            class: "auth-page",

            h1 { "Your Profile" }
            p { class: "auth-subtitle", "Your preferences drive the recommendations" }

            form {
                class: "auth-form",
                onsubmit: handle_save,

                if let Some((ok, text)) = message() {
                    div {
                        class: if ok { "form-success" } else { "form-error" },
                        "{text}"
                    }
                }

                label { "Name" }
                input {
                    r#type: "text",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }

                label { "Email" }
                input {
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { "New password (leave blank to keep)" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                label { "Interests" }
                input {
                    r#type: "text",
                    placeholder: "trekking, lakes, culture",
                    value: interests(),
                    oninput: move |evt| interests.set(evt.value()),
                }

                label { "Budget (NPR)" }
                input {
                    r#type: "number",
                    value: budget(),
                    oninput: move |evt| budget.set(evt.value()),
                }

                label { "Preferred season" }
                select {
                    value: preferred_season(),
                    onchange: move |evt| preferred_season.set(evt.value()),
                    option { value: "", "No preference" }
                    for season in SEASONS {
                        option { key: "{season}", value: "{season}", "{season}" }
                    }
                }

                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }
        }
    }
}
