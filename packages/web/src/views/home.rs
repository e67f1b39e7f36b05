use dioxus::prelude::*;

use store::AuthState;
use ui::{use_trainer, AddWordForm, AuthForm, Landing, WordCard};

/// The whole app is one page: a landing gate, then either the auth form or
/// the card screen, depending on the session state.
#[component]
pub fn Home() -> Element {
    let ctx = use_trainer();
    let view = ctx.view;
    let mut entered = use_signal(|| false);

    if !entered() {
        return rsx! {
            Landing { on_start: move |_| entered.set(true) }
        };
    }

    match view().auth {
        AuthState::Unknown => rsx! {
            div { class: "page", p { "読み込み中..." } }
        },
        AuthState::SignedOut => rsx! {
            div { class: "page", AuthForm {} }
        },
        AuthState::SignedIn(_) => {
            let v = view();
            let current = v.words.get(v.cursor).cloned();
            let revealed = v.revealed;

            let on_logout = {
                let ctx = ctx.clone();
                move |_| {
                    let ctx = ctx.clone();
                    async move {
                        ctx.trainer.logout().await;
                        ctx.sync();
                    }
                }
            };

            let on_next = {
                let ctx = ctx.clone();
                move |_| {
                    ctx.trainer.next_card();
                    ctx.sync();
                }
            };

            let on_toggle = {
                let ctx = ctx.clone();
                move |_| {
                    ctx.trainer.toggle_reveal();
                    ctx.sync();
                }
            };

            let on_delete = {
                let ctx = ctx.clone();
                move |_| {
                    let ctx = ctx.clone();
                    async move {
                        ctx.trainer.delete_current().await;
                        ctx.sync();
                    }
                }
            };

            let card = current.map(|entry| {
                rsx! {
                    WordCard {
                        word: entry.word,
                        meaning: entry.meaning,
                        revealed: revealed,
                        on_toggle: on_toggle,
                    }
                    div {
                        class: "card-actions",
                        button { onclick: on_next, "次の単語へ" }
                        button { onclick: on_delete, "現在の単語を削除" }
                    }
                }
            });

            rsx! {
                div {
                    class: "page",
                    h1 { "英単語学習アプリ" }
                    button { class: "secondary", onclick: on_logout, "ログアウト" }
                    {card}
                    AddWordForm {}
                }
            }
        }
    }
}
