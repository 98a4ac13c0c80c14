use dioxus::prelude::*;
use time::{Month, OffsetDateTime};

use super::state::{calendar_year, group_by_month, upcoming, EventDialog};
use crate::components::share_card::{share_in_background, ShareAppCard};
use crate::components::toast::use_toaster;
use crate::core::capabilities::Capabilities;
use crate::core::config::AppConfig;
use crate::core::content::{Event, EventKind};
use crate::core::navigation::Section;
use crate::core::share;
use crate::t;

fn month_name(month: Month) -> String {
    match month {
        Month::January => t!("month-january"),
        Month::February => t!("month-february"),
        Month::March => t!("month-march"),
        Month::April => t!("month-april"),
        Month::May => t!("month-may"),
        Month::June => t!("month-june"),
        Month::July => t!("month-july"),
        Month::August => t!("month-august"),
        Month::September => t!("month-september"),
        Month::October => t!("month-october"),
        Month::November => t!("month-november"),
        Month::December => t!("month-december"),
    }
}

pub(crate) fn kind_label(kind: EventKind) -> String {
    match kind {
        EventKind::Meditation => t!("event-kind-meditation"),
        EventKind::Teaching => t!("event-kind-teaching"),
        EventKind::Celebration => t!("event-kind-celebration"),
        EventKind::Retreat => t!("event-kind-retreat"),
    }
}

#[component]
pub fn CalendarPage(events: Vec<Event>) -> Element {
    let mut dialog = use_signal(EventDialog::default);

    let year = calendar_year(&events, OffsetDateTime::now_utc().year());
    let months = group_by_month(&events, year);
    let listed = upcoming(&events);
    let selected = dialog.read().selected().cloned();

    rsx! {
        section { class: "page page-calendar",
            header { class: "page__header",
                h1 { class: "page__title", {t!("calendar-title")} }
                p { class: "page__subtitle", {t!("calendar-subtitle")} }
            }

            div { class: "month-grid",
                {months.into_iter().map(|group| {
                    let count = group.events.len();
                    let overflow = group.overflow();
                    let preview = group.preview().to_vec();

                    rsx! {
                        div { key: "{group.month}", class: "card month-card",
                            h3 { class: "month-card__name", {month_name(group.month)} }
                            div { class: "month-card__year", "{group.year}" }
                            if group.is_empty() {
                                div { class: "month-card__empty", {t!("calendar-no-events")} }
                            } else {
                                div { class: "month-card__count", {t!("calendar-event-count", count = count)} }
                                {preview.into_iter().map(|event| {
                                    let to_open = event.clone();
                                    rsx! {
                                        button {
                                            key: "{event.id}",
                                            class: "month-card__event",
                                            r#type: "button",
                                            onclick: move |_| dialog.with_mut(|dialog| dialog.open(to_open.clone())),
                                            "{event.title}"
                                        }
                                    }
                                })}
                                if overflow > 0 {
                                    div { class: "month-card__more", {t!("calendar-more", count = overflow)} }
                                }
                            }
                        }
                    }
                })}
            }

            h2 { class: "page__section-title", {t!("calendar-upcoming")} }
            div { class: "page__stack",
                {listed.into_iter().map(|event| {
                    let to_open = event.clone();
                    rsx! {
                        article {
                            key: "{event.id}",
                            class: "card event-card",
                            onclick: move |_| dialog.with_mut(|dialog| dialog.open(to_open.clone())),
                            div { class: "event-card__header",
                                h3 { "{event.title}" }
                                span { class: event.kind.badge_class(), {kind_label(event.kind)} }
                            }
                            EventFacts { event: event.clone() }
                            p { class: "event-card__description", "{event.description}" }
                        }
                    }
                })}
            }

            ShareAppCard { section: Section::Calendar, heading: t!("calendar-cta-heading") }

            if let Some(event) = selected {
                EventDetail { event, on_close: move |_| dialog.with_mut(EventDialog::close) }
            }
        }
    }
}

#[component]
fn EventFacts(event: Event) -> Element {
    rsx! {
        ul { class: "event-facts",
            li { span { aria_hidden: "true", "📅 " } "{event.date_label()}" }
            li { span { aria_hidden: "true", "🕐 " } "{event.time}" }
            if let Some(location) = event.location.as_deref() {
                li { span { aria_hidden: "true", "📍 " } "{location}" }
            }
        }
    }
}

#[component]
fn EventDetail(event: Event, on_close: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let capabilities = use_context::<Capabilities>();
    let toaster = use_toaster();
    let payload = share::event_payload(&event, &config.app_url());

    rsx! {
        div { class: "dialog-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "card dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "dialog__header",
                    h2 { class: "dialog__title", "{event.title}" }
                    button {
                        class: "button button--ghost dialog__close",
                        r#type: "button",
                        aria_label: t!("action-close"),
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "dialog__row",
                    span { class: event.kind.badge_class(), {kind_label(event.kind)} }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| {
                            share_in_background(
                                capabilities.clone(),
                                toaster,
                                payload.clone(),
                                (t!("notice-event-copied"), t!("notice-event-copied-body")),
                            );
                        },
                        {t!("action-share")}
                    }
                }
                EventFacts { event: event.clone() }
                p { class: "dialog__body", "{event.description}" }
            }
        }
    }
}
