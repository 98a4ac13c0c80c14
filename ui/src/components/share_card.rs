use dioxus::prelude::*;
use tracing::debug;

use super::toast::Toaster;
use crate::core::capabilities::{Capabilities, SharePayload};
use crate::core::config::AppConfig;
use crate::core::navigation::Section;
use crate::core::share::{self, ShareOutcome};
use crate::t;

/// Runs the share flow off the event handler. Only a clipboard copy is
/// confirmed, with the given notice.
pub fn share_in_background(
    capabilities: Capabilities,
    toaster: Toaster,
    payload: SharePayload,
    copied: (String, String),
) {
    spawn_forever(async move {
        let outcome = share::share_or_copy(&capabilities, &payload).await;
        debug!(?outcome, title = %payload.title, "share finished");
        if outcome == ShareOutcome::Copied {
            let (title, description) = copied;
            toaster.success(title, description);
        }
    });
}

/// "Share App" call to action closing every content page.
#[component]
pub fn ShareAppCard(section: Section, heading: String) -> Element {
    let config = use_context::<AppConfig>();
    let capabilities = use_context::<Capabilities>();
    let toaster = super::toast::use_toaster();

    let on_share = move |_: MouseEvent| {
        let payload = share::app_payload(section, &config.app_url());
        share_in_background(
            capabilities.clone(),
            toaster,
            payload,
            (t!("notice-app-copied"), t!("notice-app-copied-body")),
        );
    };

    rsx! {
        div { class: "card card--cta",
            h3 { class: "card__heading", "{heading}" }
            p { class: "card__body", {t!("share-app-blurb")} }
            button { class: "button button--secondary", r#type: "button", onclick: on_share,
                {t!("share-app")}
            }
        }
    }
}
