use dioxus::prelude::*;

use crate::use_trainer;

/// Email/password form with separate register and login actions.
/// Registration does not log the user in; a confirmation flow, if any, is
/// the backend's concern.
#[component]
pub fn AuthForm() -> Element {
    let ctx = use_trainer();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_sign_up = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            async move {
                ctx.trainer.sign_up(&email(), &password()).await;
                ctx.sync();
            }
        }
    };

    let on_login = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            async move {
                ctx.trainer.login(&email(), &password()).await;
                ctx.sync();
            }
        }
    };

    rsx! {
        div {
            class: "auth-form",
            h2 { "ログインまたは登録" }
            input {
                r#type: "email",
                placeholder: "メールアドレス",
                value: email(),
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "パスワード",
                value: password(),
                oninput: move |evt| password.set(evt.value()),
            }
            div {
                class: "auth-actions",
                button { onclick: on_sign_up, "登録" }
                button { class: "primary", onclick: on_login, "ログイン" }
            }
        }
    }
}
