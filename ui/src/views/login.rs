use dioxus::prelude::*;

use crate::components::locale::LocaleSwitcher;
use crate::components::session::use_session;
use crate::components::toast::use_toaster;
use crate::t;

fn submit_label(busy: bool, sign_up: bool) -> String {
    match (busy, sign_up) {
        (true, _) => t!("login-busy"),
        (false, true) => t!("login-sign-up"),
        (false, false) => t!("login-sign-in"),
    }
}

/// Gate shown whenever no identity is present.
#[component]
pub fn LoginView() -> Element {
    let session = use_session();
    let toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut sign_up = use_signal(|| false);

    let busy = session.is_loading();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if session.is_loading() {
            return;
        }
        let (email, password) = (email(), password());
        spawn(async move {
            match session.login(email, password).await {
                Ok(_) => toaster.success(t!("notice-welcome"), t!("notice-welcome-body")),
                Err(err) => {
                    tracing::debug!(%err, "password sign-in rejected");
                    toaster.error(t!("notice-login-failed"), t!("notice-login-failed-body"));
                }
            }
        });
    };

    let on_google = move |_: MouseEvent| {
        if session.is_loading() {
            return;
        }
        spawn(async move {
            match session.login_with_google().await {
                Ok(_) => toaster.success(t!("notice-welcome"), t!("notice-welcome-google-body")),
                Err(err) => {
                    tracing::debug!(%err, "google sign-in rejected");
                    toaster.error(
                        t!("notice-google-login-failed"),
                        t!("notice-google-login-failed-body"),
                    );
                }
            }
        });
    };

    rsx! {
        main { class: "login",
            div { class: "card login__card",
                header { class: "login__header",
                    span { class: "page__mark page__mark--large", aria_hidden: "true", "ॐ" }
                    h1 { class: "login__title", {t!("login-title")} }
                    p { class: "login__subtitle", {t!("login-subtitle")} }
                }

                form { class: "login__form", onsubmit: on_submit,
                    input {
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: t!("login-email"),
                        aria_label: t!("login-email"),
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        autocomplete: "current-password",
                        placeholder: t!("login-password"),
                        aria_label: t!("login-password"),
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "button button--primary button--block",
                        r#type: "submit",
                        disabled: busy,
                        {submit_label(busy, sign_up())}
                    }
                }

                div { class: "login__divider", span { {t!("login-or")} } }

                button {
                    class: "button button--outline button--block",
                    r#type: "button",
                    disabled: busy,
                    onclick: on_google,
                    {t!("login-google")}
                }

                button {
                    class: "button button--ghost login__toggle",
                    r#type: "button",
                    onclick: move |_| sign_up.set(!sign_up()),
                    if sign_up() { {t!("login-have-account")} } else { {t!("login-need-account")} }
                }

                LocaleSwitcher {}
            }
        }
    }
}
