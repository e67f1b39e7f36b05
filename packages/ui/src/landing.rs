use dioxus::prelude::*;

/// Initial screen: app title and a single button into the trainer.
#[component]
pub fn Landing(on_start: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "landing",
            h1 { "英単語学習アプリ" }
            button {
                class: "primary",
                onclick: move |_| on_start.call(()),
                "ログイン / 新規登録"
            }
        }
    }
}
