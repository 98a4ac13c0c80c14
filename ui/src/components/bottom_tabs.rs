use dioxus::prelude::*;

use crate::core::navigation::Section;
use crate::t;

fn label(section: Section) -> String {
    match section {
        Section::Quotes => t!("tab-quotes"),
        Section::Videos => t!("tab-videos"),
        Section::Calendar => t!("tab-calendar"),
        Section::Teacher => t!("tab-teacher"),
        Section::Admin => t!("tab-admin"),
    }
}

fn glyph(section: Section) -> &'static str {
    match section {
        Section::Quotes => "❝",
        Section::Videos => "▶",
        Section::Calendar => "▦",
        Section::Teacher => "☸",
        Section::Admin => "⚙",
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab-nav__item tab-nav__item--active"
    } else {
        "tab-nav__item"
    }
}

/// Fixed tab bar at the bottom of the shell. Selection is reported upward;
/// the shell owns the router.
#[component]
pub fn BottomTabs(
    active: Section,
    sections: Vec<Section>,
    on_select: EventHandler<Section>,
) -> Element {
    rsx! {
        nav { class: "tab-nav", aria_label: t!("tab-nav-label"),
            for section in sections {
                button {
                    key: "{section.id()}",
                    r#type: "button",
                    class: tab_class(section == active),
                    aria_current: (section == active).to_string(),
                    onclick: move |_| on_select.call(section),
                    span { class: "tab-nav__icon", aria_hidden: "true", "{glyph(section)}" }
                    span { class: "tab-nav__label", {label(section)} }
                }
            }
        }
    }
}
