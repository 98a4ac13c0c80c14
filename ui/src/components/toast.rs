//! Dismissible notices shared by every page through context.

use dioxus::prelude::*;

use crate::core::timing;
use crate::t;

/// Notices kept on screen at once; the oldest is dropped first.
pub const NOTICE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Destructive,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeStack {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeStack {
    pub fn push(&mut self, title: String, description: String, tone: Tone) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            title,
            description,
            tone,
        });
        if self.notices.len() > NOTICE_LIMIT {
            let excess = self.notices.len() - NOTICE_LIMIT;
            self.notices.drain(..excess);
        }
        id
    }

    /// Returns whether `id` was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Handle for raising notices. Cheap to copy into event handlers and tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    stack: Signal<NoticeStack>,
    lifetime_ms: u64,
}

impl Toaster {
    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), Tone::Success);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), Tone::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        let mut stack = self.stack;
        if let Ok(mut stack) = stack.try_write() {
            stack.dismiss(id);
        };
    }

    fn push(&self, title: String, description: String, tone: Tone) {
        let mut stack = self.stack;
        let id = stack.with_mut(|stack| stack.push(title, description, tone));

        let toaster = *self;
        spawn_forever(async move {
            timing::sleep_ms(toaster.lifetime_ms).await;
            toaster.dismiss(id);
        });
    }
}

pub fn use_toaster_provider(lifetime_ms: u64) -> Toaster {
    let stack = use_signal(NoticeStack::default);
    use_context_provider(|| Toaster { stack, lifetime_ms })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let notices = toaster.stack.read().notices().to_vec();

    rsx! {
        ol { class: "toast-host", aria_live: "polite",
            for notice in notices {
                li { key: "{notice.id}", class: notice.tone.class(), role: "status",
                    div { class: "toast__body",
                        strong { class: "toast__title", "{notice.title}" }
                        if !notice.description.is_empty() {
                            p { class: "toast__description", "{notice.description}" }
                        }
                    }
                    button {
                        class: "toast__close",
                        r#type: "button",
                        aria_label: t!("toast-dismiss"),
                        onclick: move |_| toaster.dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_is_idempotent() {
        let mut stack = NoticeStack::default();
        let a = stack.push("A".into(), String::new(), Tone::Success);
        let b = stack.push("B".into(), String::new(), Tone::Destructive);
        assert_ne!(a, b);

        assert!(stack.dismiss(a));
        assert!(!stack.dismiss(a));
        assert_eq!(stack.notices().len(), 1);
        assert_eq!(stack.notices()[0].tone, Tone::Destructive);
    }

    #[test]
    fn oldest_notices_fall_off() {
        let mut stack = NoticeStack::default();
        for n in 0..5 {
            stack.push(format!("n{n}"), String::new(), Tone::Success);
        }
        let titles: Vec<_> = stack.notices().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["n2", "n3", "n4"]);
    }
}
