use dioxus::prelude::*;

/// The flashcard: always shows the word, shows the meaning only while
/// revealed. Clicking anywhere on the card toggles the meaning.
#[component]
pub fn WordCard(
    word: String,
    meaning: String,
    revealed: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "word-card",
            onclick: move |_| on_toggle.call(()),
            div {
                class: "word-card-word",
                strong { "単語:" }
                " {word}"
            }
            if revealed {
                div {
                    class: "word-card-meaning",
                    strong { "意味:" }
                    " {meaning}"
                }
            }
        }
    }
}
