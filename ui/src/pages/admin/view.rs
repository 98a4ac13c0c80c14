use dioxus::prelude::*;
use tracing::debug;

use super::forms::{EventDraft, Field, FormError, QuoteDraft};
use super::publisher::{Activity, ActivityFeed, Publisher};
use super::AdminTab;
use crate::components::toast::{use_toaster, Toaster};
use crate::core::config::AppConfig;
use crate::core::content::EventKind;
use crate::pages::calendar::kind_label;
use crate::t;

fn tab_label(tab: AdminTab) -> String {
    match tab {
        AdminTab::Quotes => t!("admin-tab-quotes"),
        AdminTab::Events => t!("admin-tab-events"),
        AdminTab::Notify => t!("admin-tab-notify"),
    }
}

fn field_label(field: Field) -> String {
    match field {
        Field::QuoteText => t!("admin-field-quote-text"),
        Field::Author => t!("admin-field-author"),
        Field::Title => t!("admin-field-event-title"),
        Field::Date => t!("admin-field-date"),
        Field::Time => t!("admin-field-time"),
        Field::Description => t!("admin-field-description"),
    }
}

fn report_invalid(toaster: Toaster, err: &FormError) {
    debug!(%err, "admin form rejected");
    let fields = err
        .fields()
        .into_iter()
        .map(field_label)
        .collect::<Vec<_>>()
        .join(", ");
    let description = match err {
        FormError::Missing(_) => t!("notice-missing-details-body", fields = fields),
        FormError::Malformed(_) => t!("notice-malformed-details-body", fields = fields),
    };
    toaster.error(t!("notice-missing-details"), description);
}

/// Writes back from a task that may outlive the page.
fn record(mut feed: Signal<ActivityFeed>, activity: Activity) {
    debug!(summary = %activity.summary, "admin activity");
    if let Ok(mut feed) = feed.try_write() {
        feed.record(activity);
    };
}

fn sub_tab_class(selected: bool) -> &'static str {
    if selected {
        "segmented__item segmented__item--active"
    } else {
        "segmented__item"
    }
}

#[component]
pub fn AdminPage() -> Element {
    let mut tab = use_signal(AdminTab::default);
    let quote_draft = use_signal(QuoteDraft::default);
    let event_draft = use_signal(EventDraft::default);
    let publishing = use_signal(|| false);
    let feed = use_signal(ActivityFeed::default);
    let active = tab();

    rsx! {
        section { class: "page page-admin",
            header { class: "page__header",
                h1 { class: "page__title", {t!("admin-title")} }
                p { class: "page__subtitle", {t!("admin-subtitle")} }
            }

            div { class: "segmented", role: "tablist",
                for sub in AdminTab::ALL {
                    button {
                        key: "{sub.id()}",
                        class: sub_tab_class(sub == active),
                        r#type: "button",
                        role: "tab",
                        aria_selected: (sub == active).to_string(),
                        onclick: move |_| tab.set(sub),
                        {tab_label(sub)}
                    }
                }
            }

            {match active {
                AdminTab::Quotes => rsx! { QuoteForm { draft: quote_draft, publishing, feed } },
                AdminTab::Events => rsx! { EventForm { draft: event_draft, publishing, feed } },
                AdminTab::Notify => rsx! { NotifyPanel { feed } },
            }}
        }
    }
}

#[component]
fn QuoteForm(
    draft: Signal<QuoteDraft>,
    publishing: Signal<bool>,
    feed: Signal<ActivityFeed>,
) -> Element {
    let config = use_context::<AppConfig>();
    let publisher = Publisher::from_config(&config);
    let toaster = use_toaster();
    let (mut draft, mut publishing) = (draft, publishing);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if publishing() {
            return;
        }
        let checked = draft.read().validate();
        match checked {
            Err(err) => report_invalid(toaster, &err),
            Ok(submission) => {
                publishing.set(true);
                // Runs to completion even if the admin leaves the page meanwhile.
                spawn_forever(async move {
                    let (mut draft, mut publishing) = (draft, publishing);
                    let activity = publisher.publish_quote(submission).await;
                    record(feed, activity);
                    toaster.success(
                        t!("notice-quote-published"),
                        t!("notice-quote-published-body"),
                    );
                    if let Ok(mut draft) = draft.try_write() {
                        *draft = QuoteDraft::default();
                    };
                    if let Ok(mut busy) = publishing.try_write() {
                        *busy = false;
                    };
                });
            }
        }
    };

    let current = draft.read().clone();

    rsx! {
        form { class: "card admin-form", onsubmit: on_submit,
            h2 { class: "card__heading", {t!("admin-quote-heading")} }
            label { class: "field",
                span { class: "field__label", {field_label(Field::QuoteText)} }
                textarea {
                    id: Field::QuoteText.id(),
                    placeholder: t!("admin-quote-text-placeholder"),
                    aria_required: "true",
                    value: "{current.text}",
                    oninput: move |evt| draft.with_mut(|d| d.text = evt.value()),
                }
            }
            label { class: "field",
                span { class: "field__label", {field_label(Field::Author)} }
                input {
                    id: Field::Author.id(),
                    placeholder: t!("admin-author-placeholder"),
                    aria_required: "true",
                    value: "{current.author}",
                    oninput: move |evt| draft.with_mut(|d| d.author = evt.value()),
                }
            }
            label { class: "field",
                span { class: "field__label", {t!("admin-field-reflection")} }
                input {
                    id: "quote-reflection",
                    placeholder: t!("admin-reflection-placeholder"),
                    value: "{current.reflection}",
                    oninput: move |evt| draft.with_mut(|d| d.reflection = evt.value()),
                }
            }
            button {
                class: "button button--primary button--block",
                r#type: "submit",
                disabled: publishing(),
                if publishing() { {t!("admin-publishing")} } else { {t!("admin-publish-quote")} }
            }
        }
    }
}

#[component]
fn EventForm(
    draft: Signal<EventDraft>,
    publishing: Signal<bool>,
    feed: Signal<ActivityFeed>,
) -> Element {
    let config = use_context::<AppConfig>();
    let publisher = Publisher::from_config(&config);
    let toaster = use_toaster();
    let (mut draft, mut publishing) = (draft, publishing);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if publishing() {
            return;
        }
        let checked = draft.read().validate();
        match checked {
            Err(err) => report_invalid(toaster, &err),
            Ok(submission) => {
                publishing.set(true);
                spawn_forever(async move {
                    let (mut draft, mut publishing) = (draft, publishing);
                    let activity = publisher.create_event(submission).await;
                    record(feed, activity);
                    toaster.success(t!("notice-event-created"), t!("notice-event-created-body"));
                    if let Ok(mut draft) = draft.try_write() {
                        *draft = EventDraft::default();
                    };
                    if let Ok(mut busy) = publishing.try_write() {
                        *busy = false;
                    };
                });
            }
        }
    };

    let current = draft.read().clone();

    rsx! {
        form { class: "card admin-form", onsubmit: on_submit,
            h2 { class: "card__heading", {t!("admin-event-heading")} }
            label { class: "field",
                span { class: "field__label", {field_label(Field::Title)} }
                input {
                    id: Field::Title.id(),
                    placeholder: t!("admin-event-title-placeholder"),
                    aria_required: "true",
                    value: "{current.title}",
                    oninput: move |evt| draft.with_mut(|d| d.title = evt.value()),
                }
            }
            div { class: "field-row",
                label { class: "field",
                    span { class: "field__label", {field_label(Field::Date)} }
                    input {
                        id: Field::Date.id(),
                        r#type: "date",
                        aria_required: "true",
                        value: "{current.date}",
                        oninput: move |evt| draft.with_mut(|d| d.date = evt.value()),
                    }
                }
                label { class: "field",
                    span { class: "field__label", {field_label(Field::Time)} }
                    input {
                        id: Field::Time.id(),
                        r#type: "time",
                        aria_required: "true",
                        value: "{current.time}",
                        oninput: move |evt| draft.with_mut(|d| d.time = evt.value()),
                    }
                }
            }
            label { class: "field",
                span { class: "field__label", {t!("admin-field-location")} }
                input {
                    id: "event-location",
                    placeholder: t!("admin-location-placeholder"),
                    value: "{current.location}",
                    oninput: move |evt| draft.with_mut(|d| d.location = evt.value()),
                }
            }
            label { class: "field",
                span { class: "field__label", {t!("admin-field-kind")} }
                select {
                    id: "event-type",
                    value: "{current.kind}",
                    oninput: move |evt| {
                        if let Ok(kind) = evt.value().parse::<EventKind>() {
                            draft.with_mut(|d| d.kind = kind);
                        }
                    },
                    for kind in EventKind::ALL {
                        option {
                            key: "{kind}",
                            value: "{kind}",
                            selected: kind == current.kind,
                            {kind_label(kind)}
                        }
                    }
                }
            }
            label { class: "field",
                span { class: "field__label", {field_label(Field::Description)} }
                textarea {
                    id: Field::Description.id(),
                    placeholder: t!("admin-description-placeholder"),
                    aria_required: "true",
                    value: "{current.description}",
                    oninput: move |evt| draft.with_mut(|d| d.description = evt.value()),
                }
            }
            button {
                class: "button button--primary button--block",
                r#type: "submit",
                disabled: publishing(),
                if publishing() { {t!("admin-publishing")} } else { {t!("admin-create-event")} }
            }
        }
    }
}

#[component]
fn NotifyPanel(feed: Signal<ActivityFeed>) -> Element {
    let config = use_context::<AppConfig>();
    let publisher = Publisher::from_config(&config);
    let toaster = use_toaster();
    let mut sending = use_signal(|| false);

    let on_send = move |_: MouseEvent| {
        if sending() {
            return;
        }
        sending.set(true);
        spawn_forever(async move {
            let mut sending = sending;
            let activity = publisher.send_daily_notification().await;
            record(feed, activity);
            toaster.success(
                t!("notice-notification-sent"),
                t!("notice-notification-sent-body"),
            );
            if let Ok(mut busy) = sending.try_write() {
                *busy = false;
            };
        });
    };

    let entries = feed.read().entries().to_vec();

    rsx! {
        div { class: "page__stack",
            div { class: "card",
                h2 { class: "card__heading", {t!("admin-notify-heading")} }
                p { class: "card__body", {t!("admin-notify-body")} }
                button {
                    class: "button button--primary button--block",
                    r#type: "button",
                    disabled: sending(),
                    onclick: on_send,
                    if sending() { {t!("admin-sending")} } else { {t!("admin-send-notification")} }
                }
            }
            div { class: "card",
                h2 { class: "card__heading", {t!("admin-recent-activity")} }
                ul { class: "activity",
                    for (index, entry) in entries.into_iter().enumerate() {
                        li { key: "{index}", class: "activity__item",
                            span { "{entry.summary}" }
                            span { class: "activity__age", "{entry.age}" }
                        }
                    }
                }
            }
        }
    }
}
