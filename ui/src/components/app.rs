//! Composition root shared by the web, desktop and mobile launchers.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use super::session::use_session_provider;
use super::toast::{use_toaster_provider, ToastHost};
use crate::core::capabilities::Capabilities;
use crate::core::composer::{transition, Surface, Transition};
use crate::core::config::AppConfig;
use crate::core::content::{Content, StaticContent};
use crate::core::platform::Platform;
use crate::i18n;
use crate::views::{AppShell, LoginView, Splash};

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
pub fn App() -> Element {
    i18n::init();

    let config = use_context_provider(AppConfig::default);
    use_context_provider(|| Content::new(StaticContent::default()));
    let capabilities = use_context_provider(Capabilities::detect);
    use_toaster_provider(config.toast_lifetime_ms);
    let session = use_session_provider(&config);

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    use_hook(|| {
        info!(
            platform = Platform::current().as_str(),
            app_id = %config.app_id,
            "starting"
        );
    });

    let last_surface = use_hook(|| Rc::new(RefCell::new(Surface::Loading)));
    use_effect(move || {
        let next = session.surface();
        let previous = last_surface.replace(next.clone());
        match transition(&previous, &next) {
            Some(Transition::SignedIn) => {
                capabilities.haptics.success();
                info!("session opened");
            }
            Some(Transition::SignedOut) => info!("session closed"),
            None => {}
        }
    });

    let surface = session.surface();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LanguageRoot { lang: lang_code(),
            {match surface {
                Surface::Loading => rsx! { Splash {} },
                Surface::Gated => rsx! { LoginView {} },
                Surface::Active(identity) => rsx! {
                    AppShell { key: "{identity.id}", identity }
                },
            }}
        }

        ToastHost {}
    }
}

/// Remounts `children` whenever `lang` changes, so every `t!` call is
/// evaluated again in the new language.
///
/// Keys only take effect between list siblings, hence the one-item list.
#[component]
fn LanguageRoot(lang: String, children: Element) -> Element {
    rsx! {
        {std::iter::once(lang).map(|lang| rsx! {
            div { key: "{lang}", class: "app", {children.clone()} }
        })}
    }
}
