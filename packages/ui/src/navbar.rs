//! Top navigation bar: route links, greeting, dark-mode toggle, logout.

use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::session::{use_client, use_session};
use crate::Icon;

fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = path;
}

#[component]
pub fn Navbar() -> Element {
    let mut state = use_session();
    let client = use_client();

    let toggle_dark = {
        let client = client.clone();
        move |_| {
            let next = !state().dark_mode;
            client.session().set_dark_mode(next);
            state.write().dark_mode = next;
        }
    };

    let logout = move |_| {
        client.session().clear_session();
        redirect("/");
    };

    let snapshot = state();
    rsx! {
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "WanderWise" }

            div {
                class: "navbar-links",
                a { href: "/destinations", "Destinations" }
                if snapshot.is_logged_in() {
                    a { href: "/recommendations", "Recommendations" }
                    a { href: "/wishlist", "Wishlist" }
                    a { href: "/profile", "Profile" }
                }
                if snapshot.is_admin() {
                    a { href: "/admin", "Admin" }
                }
            }

            div {
                class: "navbar-session",
                button {
                    class: "dark-toggle",
                    title: "Toggle dark mode",
                    onclick: toggle_dark,
                    if snapshot.dark_mode {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    }
                }
                if let Some(ref session) = snapshot.session {
                    span { class: "navbar-greeting", "Hi, {session.user_name}" }
                    button { class: "navbar-logout", onclick: logout, "Logout" }
                } else {
                    a { href: "/login", "Login" }
                    a { class: "navbar-register", href: "/register", "Register" }
                }
            }
        }
    }
}
