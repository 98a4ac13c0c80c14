use dioxus::prelude::*;
use tracing::debug;

use crate::components::bottom_tabs::BottomTabs;
use crate::components::locale::LocaleSwitcher;
use crate::components::session::use_session;
use crate::core::capabilities::{Capabilities, ImpactStyle};
use crate::core::config::AppConfig;
use crate::core::content::Content;
use crate::core::navigation::{visible_sections, Section, TabRouter};
use crate::core::session::Identity;
use crate::pages::admin::AdminPage;
use crate::pages::calendar::CalendarPage;
use crate::pages::quotes::QuotesPage;
use crate::pages::teacher::TeacherPage;
use crate::pages::videos::VideosPage;
use crate::t;

/// Shown until the saved session has been looked up.
#[component]
pub fn Splash() -> Element {
    rsx! {
        div { class: "splash", role: "status", aria_busy: "true",
            span { class: "page__mark page__mark--large splash__mark", aria_hidden: "true", "ॐ" }
            p { class: "splash__label", {t!("splash-loading")} }
        }
    }
}

/// The signed-in application: header, the current page and the tab bar.
/// Mounted fresh for every session, so the router always starts on quotes.
#[component]
pub fn AppShell(identity: Identity) -> Element {
    let session = use_session();
    let config = use_context::<AppConfig>();
    let content = use_context::<Content>();
    let capabilities = use_context::<Capabilities>();
    let mut router = use_signal(TabRouter::default);

    let sections = visible_sections(Some(&identity));
    let active = router.read().active();
    let page = router.read().current_page(Some(&identity));

    let on_select = move |section: Section| {
        capabilities.haptics.impact(ImpactStyle::Light);
        if router.with_mut(|router| router.select_section(section)) {
            debug!(section = %section, "tab selected");
        }
    };

    rsx! {
        div { class: "shell",
            header { class: "shell__header",
                span { class: "shell__brand", "{config.app_name}" }
                span { class: "shell__user", "{identity.name}" }
                LocaleSwitcher {}
                button {
                    class: "button button--ghost shell__sign-out",
                    r#type: "button",
                    onclick: move |_| session.logout(),
                    {t!("action-sign-out")}
                }
            }

            main { class: "shell__page",
                {match page {
                    Section::Quotes => rsx! { QuotesPage { quotes: content.list_quotes() } },
                    Section::Videos => rsx! { VideosPage { videos: content.list_videos() } },
                    Section::Calendar => rsx! { CalendarPage { events: content.list_events() } },
                    Section::Teacher => rsx! { TeacherPage { profile: content.teacher_profile() } },
                    Section::Admin => rsx! { AdminPage {} },
                }}
            }

            BottomTabs { active, sections, on_select }
        }
    }
}
