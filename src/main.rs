use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod diagnostics;
mod playback;
mod scroll;
mod throttle;
mod utils;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "RustyReel" }

        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
