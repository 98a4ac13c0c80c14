use dioxus::prelude::*;

use super::state::PlayerState;
use crate::components::share_card::{share_in_background, ShareAppCard};
use crate::components::toast::use_toaster;
use crate::core::capabilities::Capabilities;
use crate::core::content::Video;
use crate::core::navigation::Section;
use crate::core::share;
use crate::t;

const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn VideosPage(videos: Vec<Video>) -> Element {
    let mut player = use_signal(PlayerState::default);
    let capabilities = use_context::<Capabilities>();
    let toaster = use_toaster();

    let current = player.read().current().cloned();

    rsx! {
        section { class: "page page-videos",
            header { class: "page__header",
                h1 { class: "page__title", {t!("videos-title")} }
                p { class: "page__subtitle", {t!("videos-subtitle")} }
            }

            if let Some(video) = current {
                div { class: "card player",
                    div { class: "player__frame",
                        iframe {
                            src: video.embed_url(),
                            title: "{video.title}",
                            allow: PLAYER_ALLOW,
                            allowfullscreen: true,
                        }
                    }
                    div { class: "player__meta",
                        h3 { "{video.title}" }
                        p { "{video.description}" }
                        button {
                            class: "button button--ghost",
                            r#type: "button",
                            onclick: move |_| player.with_mut(PlayerState::close),
                            {t!("videos-close")}
                        }
                    }
                }
            }

            div { class: "page__stack",
                {videos.into_iter().map(|video| {
                    let payload = share::video_payload(&video);
                    let capabilities = capabilities.clone();
                    let watch_url = video.watch_url();
                    let to_play = video.clone();

                    rsx! {
                        article { key: "{video.id}", class: "card video-card",
                            div { class: "video-card__thumb",
                                img { src: "{video.thumbnail}", alt: "{video.title}" }
                                button {
                                    class: "video-card__play",
                                    r#type: "button",
                                    aria_label: t!("videos-play"),
                                    onclick: move |_| player.with_mut(|player| player.play(to_play.clone())),
                                    "▶"
                                }
                                span { class: "video-card__duration", "{video.duration}" }
                            }
                            div { class: "video-card__body",
                                h3 { "{video.title}" }
                                p { "{video.description}" }
                                div { class: "video-card__actions",
                                    button {
                                        class: "button button--ghost",
                                        r#type: "button",
                                        onclick: move |_| {
                                            share_in_background(
                                                capabilities.clone(),
                                                toaster,
                                                payload.clone(),
                                                (t!("notice-video-copied"), t!("notice-video-copied-body")),
                                            );
                                        },
                                        {t!("action-share")}
                                    }
                                    a {
                                        class: "button button--ghost",
                                        href: "{watch_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        {t!("videos-youtube")}
                                    }
                                }
                            }
                        }
                    }
                })}
            }

            ShareAppCard { section: Section::Videos, heading: t!("videos-cta-heading") }
        }
    }
}
