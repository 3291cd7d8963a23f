//! Admin panel: tabbed users/destinations tables with edit modals, a thin
//! mirror of the backend CRUD endpoints. The only client-side rule is the
//! refusal to delete admin accounts (the backend enforces it too).

use api::{DestinationRequest, UpdateUserRequest};
use dioxus::prelude::*;
use store::{AdminUser, Destination, Role};
use ui::{use_client, use_session, ModalOverlay, Toast};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Users,
    Destinations,
}

#[component]
pub fn Admin() -> Element {
    let state = use_session();
    let client = use_client();
    let nav = use_navigator();

    let mut tab = use_signal(|| Tab::Users);
    let mut users = use_signal(Vec::<AdminUser>::new);
    let mut destinations = use_signal(Vec::<Destination>::new);
    let mut toast = use_signal(|| Option::<String>::None);

    // User modals
    let mut edit_user = use_signal(|| Option::<AdminUser>::None);
    let mut user_name = use_signal(String::new);
    let mut user_email = use_signal(String::new);
    let mut user_password = use_signal(String::new);
    let mut user_role = use_signal(String::new);
    let mut user_details = use_signal(|| Option::<AdminUser>::None);
    let mut confirm_delete_user = use_signal(|| Option::<i64>::None);

    // Destination modal
    let mut show_dest_modal = use_signal(|| false);
    let mut edit_dest_id = use_signal(|| Option::<i64>::None);
    let mut dest_name = use_signal(String::new);
    let mut dest_place = use_signal(String::new);
    let mut dest_description = use_signal(String::new);
    let mut dest_cost = use_signal(String::new);
    let mut dest_season = use_signal(String::new);
    let mut dest_tags = use_signal(String::new);
    let mut dest_image_url = use_signal(String::new);
    let mut confirm_delete_dest = use_signal(|| Option::<i64>::None);

    let users_client = client.clone();
    let mut users_loader = use_resource(move || {
        let client = users_client.clone();
        async move {
            if !client.session().is_logged_in() {
                return;
            }
            match client.admin_users().await {
                Ok(list) => users.set(list),
                Err(err) if err.is_unauthorized() => {
                    client.session().clear_session();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to fetch users: {err}");
                    toast.set(Some("Failed to fetch users.".to_string()));
                }
            }
        }
    });

    let dests_client = client.clone();
    let mut dests_loader = use_resource(move || {
        let client = dests_client.clone();
        async move {
            if !client.session().is_logged_in() {
                return;
            }
            match client.admin_destinations().await {
                Ok(list) => destinations.set(list),
                Err(err) if err.is_unauthorized() => {
                    client.session().clear_session();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to fetch destinations: {err}");
                    toast.set(Some("Failed to fetch destinations.".to_string()));
                }
            }
        }
    });

    let open_edit_user = EventHandler::new(move |user: AdminUser| {
        user_name.set(user.name.clone());
        user_email.set(user.email.clone());
        user_password.set(String::new());
        user_role.set(user.role.as_str().to_string());
        edit_user.set(Some(user));
    });

    let details_client = client.clone();
    let view_user = EventHandler::new(move |id: i64| {
        let client = details_client.clone();
        spawn(async move {
            match client.admin_user(id).await {
                Ok(user) => user_details.set(Some(user)),
                Err(err) => {
                    tracing::error!("failed to fetch user {id}: {err}");
                    toast.set(Some("Failed to fetch user details.".to_string()));
                }
            }
        });
    });

    // Deleting an admin is refused before any request goes out.
    let request_delete_user = EventHandler::new(move |user: AdminUser| {
        if user.role == Role::Admin {
            toast.set(Some("Cannot delete admin users.".to_string()));
            return;
        }
        confirm_delete_user.set(Some(user.id));
    });

    let save_details_client = client.clone();
    let save_user_details = move |_| {
        let Some(user) = edit_user() else { return };
        let client = save_details_client.clone();
        spawn(async move {
            let p = user_password();
            let request = UpdateUserRequest {
                name: Some(user_name().trim().to_string()),
                email: Some(user_email().trim().to_string()),
                password: (!p.is_empty()).then_some(p),
                ..UpdateUserRequest::default()
            };
            match client.admin_update_user(user.id, &request).await {
                Ok(()) => {
                    toast.set(Some("User details updated.".to_string()));
                    edit_user.set(None);
                    users_loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to update user {}: {err}", user.id);
                    toast.set(Some("Failed to update user details.".to_string()));
                }
            }
        });
    };

    let save_role_client = client.clone();
    let save_user_role = move |_| {
        let Some(user) = edit_user() else { return };
        let client = save_role_client.clone();
        spawn(async move {
            match client.admin_set_role(user.id, Role::parse(&user_role())).await {
                Ok(()) => {
                    toast.set(Some("User role updated.".to_string()));
                    edit_user.set(None);
                    users_loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to update role for user {}: {err}", user.id);
                    toast.set(Some("Failed to update user role.".to_string()));
                }
            }
        });
    };

    let delete_user_client = client.clone();
    let delete_user = move |_| {
        let Some(id) = confirm_delete_user() else { return };
        let client = delete_user_client.clone();
        spawn(async move {
            match client.admin_delete_user(id).await {
                Ok(()) => {
                    toast.set(Some("User deleted.".to_string()));
                    users_loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to delete user {id}: {err}");
                    toast.set(Some("Failed to delete user.".to_string()));
                }
            }
            confirm_delete_user.set(None);
        });
    };

    let mut open_create_dest = move || {
        edit_dest_id.set(None);
        dest_name.set(String::new());
        dest_place.set(String::new());
        dest_description.set(String::new());
        dest_cost.set(String::new());
        dest_season.set(String::new());
        dest_tags.set(String::new());
        dest_image_url.set(String::new());
        show_dest_modal.set(true);
    };

    let open_edit_dest = EventHandler::new(move |dest: Destination| {
        edit_dest_id.set(Some(dest.id));
        dest_name.set(dest.name);
        dest_place.set(dest.place);
        dest_description.set(dest.description);
        dest_cost.set(dest.average_cost.to_string());
        dest_season.set(dest.best_season);
        dest_tags.set(dest.tags);
        dest_image_url.set(dest.image_url.unwrap_or_default());
        show_dest_modal.set(true);
    });

    let save_dest_client = client.clone();
    let save_destination = move |_| {
        let client = save_dest_client.clone();
        spawn(async move {
            let name = dest_name().trim().to_string();
            let place = dest_place().trim().to_string();
            if name.is_empty() || place.is_empty() {
                toast.set(Some("Name and place are required.".to_string()));
                return;
            }
            let request = DestinationRequest {
                name,
                place,
                description: dest_description(),
                average_cost: dest_cost().trim().parse().unwrap_or(0.0),
                best_season: dest_season(),
                tags: dest_tags(),
                image_url: dest_image_url(),
            };
            let result = match edit_dest_id() {
                Some(id) => client.admin_update_destination(id, &request).await,
                None => client.admin_create_destination(&request).await,
            };
            match result {
                Ok(()) => {
                    toast.set(Some(if edit_dest_id().is_some() {
                        "Destination updated.".to_string()
                    } else {
                        "Destination created.".to_string()
                    }));
                    show_dest_modal.set(false);
                    dests_loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to save destination: {err}");
                    toast.set(Some("Failed to save destination.".to_string()));
                }
            }
        });
    };

    let delete_dest_client = client.clone();
    let delete_destination = move |_| {
        let Some(id) = confirm_delete_dest() else { return };
        let client = delete_dest_client.clone();
        spawn(async move {
            match client.admin_delete_destination(id).await {
                Ok(()) => {
                    toast.set(Some("Destination deleted.".to_string()));
                    dests_loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to delete destination {id}: {err}");
                    toast.set(Some("Failed to delete destination.".to_string()));
                }
            }
            confirm_delete_dest.set(None);
        });
    };

    if !state().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }
    if !state().is_admin() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "admin-page",

            header {
                class: "page-header",
                h1 { "Admin Dashboard" }
            }

            div {
                class: "admin-tabs",
                button {
                    class: if tab() == Tab::Users { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Users),
                    "Users"
                }
                button {
                    class: if tab() == Tab::Destinations { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Destinations),
                    "Destinations"
                }
            }

            {match tab() {
                Tab::Users => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for user in users() {
                                tr {
                                    key: "{user.id}",
                                    td { "{user.id}" }
                                    td { "{user.name}" }
                                    td { "{user.email}" }
                                    td { "{user.role}" }
                                    td {
                                        class: "table-actions",
                                        {
                                            let for_view = user.id;
                                            let for_edit = user.clone();
                                            let for_delete = user.clone();
                                            let is_admin = user.role == Role::Admin;
                                            rsx! {
                                                button {
                                                    class: "btn small",
                                                    onclick: move |_| view_user.call(for_view),
                                                    "View"
                                                }
                                                button {
                                                    class: "btn small",
                                                    onclick: move |_| open_edit_user.call(for_edit.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn small danger",
                                                    disabled: is_admin,
                                                    onclick: move |_| request_delete_user.call(for_delete.clone()),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Tab::Destinations => rsx! {
                    div {
                        class: "page-toolbar",
                        button {
                            class: "btn primary",
                            onclick: move |_| open_create_dest(),
                            "Add Destination"
                        }
                    }
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                                th { "Place" }
                                th { "Cost (NPR)" }
                                th { "Season" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for dest in destinations() {
                                tr {
                                    key: "{dest.id}",
                                    td { "{dest.id}" }
                                    td { "{dest.name}" }
                                    td { "{dest.place}" }
                                    td { "{dest.average_cost}" }
                                    td { "{dest.best_season}" }
                                    td {
                                        class: "table-actions",
                                        {
                                            let for_edit = dest.clone();
                                            let for_delete = dest.id;
                                            rsx! {
                                                button {
                                                    class: "btn small",
                                                    onclick: move |_| open_edit_dest.call(for_edit.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn small danger",
                                                    onclick: move |_| confirm_delete_dest.set(Some(for_delete)),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}

            // Edit-user modal: details and role are separate backend calls.
            if edit_user().is_some() {
                ModalOverlay {
                    on_close: move |_| edit_user.set(None),
                    div {
                        class: "modal-form",
                        h3 { "Edit user" }
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: user_name(),
                            oninput: move |evt| user_name.set(evt.value()),
                        }
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: user_email(),
                            oninput: move |evt| user_email.set(evt.value()),
                        }
                        label { "New password (optional)" }
                        input {
                            r#type: "password",
                            value: user_password(),
                            oninput: move |evt| user_password.set(evt.value()),
                        }
                        label { "Role" }
                        select {
                            value: user_role(),
                            onchange: move |evt| user_role.set(evt.value()),
                            option { value: "USER", "USER" }
                            option { value: "ADMIN", "ADMIN" }
                        }
                        div {
                            class: "form-actions",
                            button { class: "btn primary", onclick: save_user_details, "Save Details" }
                            button { class: "btn secondary", onclick: save_user_role, "Save Role" }
                            button { class: "btn", onclick: move |_| edit_user.set(None), "Cancel" }
                        }
                    }
                }
            }

            if let Some(details) = user_details() {
                ModalOverlay {
                    on_close: move |_| user_details.set(None),
                    div {
                        class: "modal-form",
                        h3 { "User details" }
                        p { b { "ID: " } "{details.id}" }
                        p { b { "Name: " } "{details.name}" }
                        p { b { "Email: " } "{details.email}" }
                        p { b { "Role: " } "{details.role}" }
                        div {
                            class: "form-actions",
                            button { class: "btn", onclick: move |_| user_details.set(None), "Close" }
                        }
                    }
                }
            }

            if confirm_delete_user().is_some() {
                ModalOverlay {
                    on_close: move |_| confirm_delete_user.set(None),
                    div {
                        class: "confirm-dialog",
                        h3 { "Delete user?" }
                        p { "Are you sure you want to delete this user?" }
                        div {
                            class: "form-actions",
                            button { class: "btn danger", onclick: delete_user, "Delete" }
                            button { class: "btn secondary", onclick: move |_| confirm_delete_user.set(None), "Cancel" }
                        }
                    }
                }
            }

            if show_dest_modal() {
                ModalOverlay {
                    on_close: move |_| show_dest_modal.set(false),
                    div {
                        class: "modal-form",
                        h3 {
                            if edit_dest_id().is_some() { "Edit destination" } else { "New destination" }
                        }
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: dest_name(),
                            oninput: move |evt| dest_name.set(evt.value()),
                        }
                        label { "Place" }
                        input {
                            r#type: "text",
                            value: dest_place(),
                            oninput: move |evt| dest_place.set(evt.value()),
                        }
                        label { "Description" }
                        textarea {
                            value: dest_description(),
                            oninput: move |evt| dest_description.set(evt.value()),
                        }
                        label { "Average cost (NPR)" }
                        input {
                            r#type: "number",
                            value: dest_cost(),
                            oninput: move |evt| dest_cost.set(evt.value()),
                        }
                        label { "Best season" }
                        input {
                            r#type: "text",
                            value: dest_season(),
                            oninput: move |evt| dest_season.set(evt.value()),
                        }
                        label { "Tags (comma separated)" }
                        input {
                            r#type: "text",
                            placeholder: "lake,trek",
                            value: dest_tags(),
                            oninput: move |evt| dest_tags.set(evt.value()),
                        }
                        label { "Image URL" }
                        input {
                            r#type: "text",
                            value: dest_image_url(),
                            oninput: move |evt| dest_image_url.set(evt.value()),
                        }
                        div {
                            class: "form-actions",
                            button { class: "btn primary", onclick: save_destination, "Save" }
                            button { class: "btn secondary", onclick: move |_| show_dest_modal.set(false), "Cancel" }
                        }
                    }
                }
            }

            if confirm_delete_dest().is_some() {
                ModalOverlay {
                    on_close: move |_| confirm_delete_dest.set(None),
                    div {
                        class: "confirm-dialog",
                        h3 { "Delete destination?" }
                        p { "Are you sure you want to delete this destination?" }
                        div {
                            class: "form-actions",
                            button { class: "btn danger", onclick: delete_destination, "Delete" }
                            button { class: "btn secondary", onclick: move |_| confirm_delete_dest.set(None), "Cancel" }
                        }
                    }
                }
            }

            if let Some(text) = toast() {
                Toast {
                    message: text.clone(),
                    on_close: move |_| toast.set(None),
                }
            }
        }
    }
}
