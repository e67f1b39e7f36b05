use dioxus::prelude::*;

use ui::TrainerProvider;
use views::Home;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        TrainerProvider {
            Home {}
        }
    }
}
