use dioxus::prelude::*;

use crate::components::share_card::ShareAppCard;
use crate::core::content::TeacherProfile;
use crate::core::navigation::Section;
use crate::t;

#[component]
pub fn TeacherPage(profile: TeacherProfile) -> Element {
    let (cap, rest) = profile.drop_cap();
    let rest = rest.to_string();
    // The featured quote sits after the first paragraph.
    let (lead, remaining) = profile.paragraphs.split_at(profile.paragraphs.len().min(1));
    let lead = lead.to_vec();
    let remaining = remaining.to_vec();

    rsx! {
        section { class: "page page-teacher",
            header { class: "teacher-hero",
                span { class: "page__mark", aria_hidden: "true", "ॐ" }
                h1 { class: "teacher-hero__name", "{profile.name}" }
                p { class: "teacher-hero__tagline", "{profile.tagline}" }
            }

            article { class: "card teacher-bio",
                p { class: "teacher-bio__intro",
                    span { class: "teacher-bio__drop-cap", "{cap}" }
                    "{rest}"
                }
                for paragraph in lead {
                    p { "{paragraph}" }
                }
                figure { class: "teacher-bio__featured",
                    blockquote { "“{profile.featured_quote}”" }
                    figcaption { "— {profile.name}" }
                }
                for paragraph in remaining {
                    p { "{paragraph}" }
                }

                div { class: "teachings",
                    h3 { class: "teachings__title", {t!("teacher-core-teachings")} }
                    div { class: "teachings__grid",
                        for teaching in profile.teachings.iter() {
                            div { key: "{teaching.title}", class: "teachings__item",
                                h4 { "{teaching.title}" }
                                p { "{teaching.summary}" }
                            }
                        }
                    }
                }

                p { class: "teacher-bio__closing",
                    "{profile.closing} "
                    em { "“{profile.closing_quote}”" }
                }
            }

            ShareAppCard { section: Section::Teacher, heading: t!("teacher-cta-heading") }
        }
    }
}
