use dioxus::prelude::*;

use ui::{Navbar, SessionProvider};
use views::{
    Admin, Destinations, Home, Login, NotFound, Profile, Recommendations, Register, Wishlist,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/destinations")]
        Destinations {},
        #[route("/recommendations")]
        Recommendations {},
        #[route("/wishlist")]
        Wishlist {},
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        Admin {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar above every routed view.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
