use dioxus::prelude::*;

use super::state::LikedQuotes;
use crate::components::share_card::{share_in_background, ShareAppCard};
use crate::components::toast::use_toaster;
use crate::core::capabilities::Capabilities;
use crate::core::config::AppConfig;
use crate::core::content::Quote;
use crate::core::navigation::Section;
use crate::core::share;
use crate::t;

fn love_class(liked: bool) -> &'static str {
    if liked {
        "button button--ghost quote-card__love quote-card__love--active"
    } else {
        "button button--ghost quote-card__love"
    }
}

#[component]
pub fn QuotesPage(quotes: Vec<Quote>) -> Element {
    let mut liked = use_signal(LikedQuotes::default);
    let config = use_context::<AppConfig>();
    let capabilities = use_context::<Capabilities>();
    let toaster = use_toaster();
    let app_url = config.app_url();

    rsx! {
        section { class: "page page-quotes",
            header { class: "page__header",
                span { class: "page__mark", aria_hidden: "true", "ॐ" }
                h1 { class: "page__title", {t!("quotes-title")} }
                p { class: "page__subtitle", {t!("quotes-subtitle")} }
            }

            div { class: "page__stack",
                {quotes.into_iter().map(|quote| {
                    let is_liked = liked.read().is_liked(&quote.id);
                    let like_id = quote.id.clone();
                    let payload = share::quote_payload(&quote, &app_url);
                    let capabilities = capabilities.clone();
                    let date_label = quote.date_label();

                    rsx! {
                        article { key: "{quote.id}", class: "card quote-card",
                            blockquote { class: "quote-card__text", "“{quote.text}”" }
                            p { class: "quote-card__author", "— {quote.author}" }
                            if let Some(reflection) = quote.reflection.clone() {
                                p { class: "quote-card__reflection",
                                    {t!("quote-reflection", reflection = reflection)}
                                }
                            }
                            footer { class: "quote-card__footer",
                                div { class: "quote-card__actions",
                                    button {
                                        class: love_class(is_liked),
                                        r#type: "button",
                                        aria_pressed: "{is_liked}",
                                        onclick: move |_| {
                                            liked.with_mut(|liked| liked.toggle(&like_id));
                                        },
                                        if is_liked { {t!("quote-loved")} } else { {t!("quote-love")} }
                                    }
                                    button {
                                        class: "button button--ghost",
                                        r#type: "button",
                                        onclick: move |_| {
                                            share_in_background(
                                                capabilities.clone(),
                                                toaster,
                                                payload.clone(),
                                                (t!("notice-quote-copied"), t!("notice-quote-copied-body")),
                                            );
                                        },
                                        {t!("action-share")}
                                    }
                                }
                                time { class: "quote-card__date", "{date_label}" }
                            }
                        }
                    }
                })}
            }

            ShareAppCard { section: Section::Quotes, heading: t!("quotes-cta-heading") }
        }
    }
}
