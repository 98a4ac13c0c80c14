use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker. Writes the app-wide language signal so the root can
/// remount the tree with fresh strings.
#[component]
pub fn LocaleSwitcher() -> Element {
    let mut lang_code = use_context::<Signal<String>>();
    let langs = i18n::available_languages();
    if langs.len() < 2 {
        return rsx! {};
    }
    let current = lang_code();

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => lang_code.set(tag),
            Err(err) => tracing::warn!(%err, %tag, "could not switch language"),
        }
    };

    rsx! {
        div { class: "locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("language-label")} }
            select { id: "locale-select", value: "{current}", oninput: on_change,
                for code in langs {
                    option {
                        key: "{code}",
                        value: "{code}",
                        selected: code == current,
                        "{code}"
                    }
                }
            }
        }
    }
}
