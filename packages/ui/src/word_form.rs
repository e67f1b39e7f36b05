use dioxus::prelude::*;

use crate::use_trainer;

/// Form for adding a new word/meaning pair. The inputs clear only after
/// the backend confirmed the insert; an empty field makes the add a silent
/// no-op.
#[component]
pub fn AddWordForm() -> Element {
    let ctx = use_trainer();
    let mut word = use_signal(String::new);
    let mut meaning = use_signal(String::new);

    let on_add = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            async move {
                if ctx.trainer.add_word(&word(), &meaning()).await {
                    word.set(String::new());
                    meaning.set(String::new());
                }
                ctx.sync();
            }
        }
    };

    rsx! {
        div {
            class: "add-word-form",
            h2 { "新しい単語を追加" }
            input {
                r#type: "text",
                placeholder: "単語",
                value: word(),
                oninput: move |evt| word.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "意味",
                value: meaning(),
                oninput: move |evt| meaning.set(evt.value()),
            }
            button { class: "primary", onclick: on_add, "単語を追加" }
        }
    }
}
