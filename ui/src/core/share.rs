//! Share-or-copy flow and the payloads each page shares.

use tracing::{debug, warn};

use super::capabilities::{Capabilities, SharePayload};
use super::content::{Event, Quote, Video};
use super::navigation::Section;

const QUOTE_FOOTER: &str = "Shared from our Spiritual Wisdom app";
const VIDEO_FOOTER: &str = "Watch on our Spiritual Wisdom app";
const EVENT_FOOTER: &str = "From our Spiritual Wisdom calendar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet accepted the payload.
    Shared,
    /// The user dismissed the share sheet. Nothing to report.
    Cancelled,
    /// No share sheet; the fallback text is on the clipboard.
    Copied,
    /// Neither share sheet nor clipboard worked.
    Unavailable,
}

impl ShareOutcome {
    /// Only a clipboard copy gets a confirmation notice.
    pub fn needs_notice(self) -> bool {
        matches!(self, Self::Copied)
    }
}

pub async fn share_or_copy(capabilities: &Capabilities, payload: &SharePayload) -> ShareOutcome {
    if capabilities.share.is_supported() {
        return match capabilities.share.share(payload).await {
            Ok(()) => ShareOutcome::Shared,
            Err(err) => {
                debug!(%err, title = %payload.title, "share sheet dismissed");
                ShareOutcome::Cancelled
            }
        };
    }

    match capabilities.clipboard.write_text(&payload.fallback).await {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            warn!(%err, title = %payload.title, "nothing to share with: clipboard unavailable");
            ShareOutcome::Unavailable
        }
    }
}

pub fn quote_payload(quote: &Quote, app_url: &str) -> SharePayload {
    let text = format!("\"{}\" - {}\n\n{QUOTE_FOOTER}", quote.text, quote.author);
    SharePayload {
        title: "Daily Wisdom".to_string(),
        fallback: text.clone(),
        text,
        url: Some(app_url.to_string()),
    }
}

pub fn video_payload(video: &Video) -> SharePayload {
    let text = format!("🎥 {}\n\n{}\n\n{VIDEO_FOOTER}", video.title, video.description);
    let watch_url = video.watch_url();
    SharePayload {
        title: video.title.clone(),
        fallback: format!("{text}\n\n{watch_url}"),
        text,
        url: Some(watch_url),
    }
}

pub fn event_payload(event: &Event, app_url: &str) -> SharePayload {
    let mut text = format!("📅 {}\n", event.title);
    if let Some(location) = event.location.as_deref() {
        text.push_str(&format!("📍 {location}\n"));
    }
    text.push_str(&format!(
        "🕐 {}\n\n{}\n\n{EVENT_FOOTER}",
        event.time, event.description
    ));
    SharePayload {
        title: event.title.clone(),
        fallback: text.clone(),
        text,
        url: Some(app_url.to_string()),
    }
}

/// "Share App" call to action; title and blurb depend on the page it sits on.
pub fn app_payload(section: Section, app_url: &str) -> SharePayload {
    let (title, text) = match section {
        Section::Videos => (
            "Spiritual Wisdom Videos",
            "🙏 Check out these inspiring spiritual videos! This app has been such a source of peace and wisdom for me.",
        ),
        Section::Calendar => (
            "Spiritual Calendar",
            "🗓️ Stay connected with upcoming spiritual events and teachings through this beautiful app!",
        ),
        Section::Teacher => (
            "Meet Our Gurudev",
            "🙏 I've been inspired by the teachings shared in this beautiful spiritual app. Thought you might find it meaningful too!",
        ),
        Section::Quotes | Section::Admin => (
            "Spiritual Wisdom App",
            "🙏 I found this beautiful spiritual app that shares daily wisdom and inspiration. Thought you might find it meaningful too!",
        ),
    };
    SharePayload {
        title: title.to_string(),
        text: text.to_string(),
        url: Some(app_url.to_string()),
        fallback: format!("{text}\n\n{app_url}"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::future::LocalBoxFuture;
    use futures::FutureExt;

    use super::*;
    use crate::core::capabilities::{Clipboard, NoopHaptics, NoopShareSheet, ShareSheet};
    use crate::core::content::{ContentProvider, StaticContent};
    use crate::core::error::CapabilityError;

    #[derive(Default)]
    struct RecordingClipboard {
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
            self.written.borrow_mut().push(text.to_string());
            async { Ok(()) }.boxed_local()
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&self, _text: &str) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
            async { Err(CapabilityError::Failed("denied".into())) }.boxed_local()
        }
    }

    struct ScriptedSheet {
        accept: bool,
    }

    impl ShareSheet for ScriptedSheet {
        fn is_supported(&self) -> bool {
            true
        }

        fn share(&self, _payload: &SharePayload) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
            let accept = self.accept;
            async move {
                if accept {
                    Ok(())
                } else {
                    Err(CapabilityError::Failed("AbortError".into()))
                }
            }
            .boxed_local()
        }
    }

    fn capabilities(share: Rc<dyn ShareSheet>, clipboard: Rc<dyn Clipboard>) -> Capabilities {
        Capabilities {
            haptics: Rc::new(NoopHaptics),
            share,
            clipboard,
        }
    }

    fn first_quote() -> Quote {
        StaticContent::default().list_quotes().remove(0)
    }

    #[tokio::test]
    async fn unsupported_sheet_copies_fallback() {
        let clipboard = Rc::new(RecordingClipboard::default());
        let caps = capabilities(Rc::new(NoopShareSheet), clipboard.clone());
        let payload = quote_payload(&first_quote(), "https://spiritualwisdom.app");

        let outcome = share_or_copy(&caps, &payload).await;
        assert_eq!(outcome, ShareOutcome::Copied);
        assert!(outcome.needs_notice());
        assert_eq!(clipboard.written.borrow().as_slice(), [payload.fallback]);
    }

    #[tokio::test]
    async fn cancelled_share_is_silent() {
        let clipboard = Rc::new(RecordingClipboard::default());
        let caps = capabilities(Rc::new(ScriptedSheet { accept: false }), clipboard.clone());
        let payload = app_payload(Section::Quotes, "https://spiritualwisdom.app");

        let outcome = share_or_copy(&caps, &payload).await;
        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert!(!outcome.needs_notice());
        assert!(clipboard.written.borrow().is_empty());
    }

    #[tokio::test]
    async fn accepted_share_skips_clipboard() {
        let clipboard = Rc::new(RecordingClipboard::default());
        let caps = capabilities(Rc::new(ScriptedSheet { accept: true }), clipboard.clone());
        let outcome = share_or_copy(&caps, &app_payload(Section::Videos, "u")).await;
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(clipboard.written.borrow().is_empty());
    }

    #[tokio::test]
    async fn clipboard_failure_is_unavailable() {
        let caps = capabilities(Rc::new(NoopShareSheet), Rc::new(FailingClipboard));
        let outcome = share_or_copy(&caps, &app_payload(Section::Teacher, "u")).await;
        assert_eq!(outcome, ShareOutcome::Unavailable);
        assert!(!outcome.needs_notice());
    }

    #[test]
    fn quote_text_quotes_and_attributes() {
        let payload = quote_payload(&first_quote(), "https://spiritualwisdom.app");
        assert_eq!(
            payload.text,
            "\"The mind is everything. What you think you become.\" - Buddha\n\nShared from our Spiritual Wisdom app"
        );
        assert_eq!(payload.fallback, payload.text);
    }

    #[test]
    fn video_fallback_appends_watch_url() {
        let video = StaticContent::default().list_videos().remove(0);
        let payload = video_payload(&video);
        assert!(payload.text.starts_with("🎥 Morning Meditation Practice\n\n"));
        assert!(payload
            .fallback
            .ends_with("\n\nhttps://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert_eq!(payload.url.as_deref(), Some(video.watch_url().as_str()));
    }

    #[test]
    fn event_text_lists_location_and_time() {
        let mut event = StaticContent::default().list_events().remove(0);
        let payload = event_payload(&event, "u");
        assert!(payload
            .text
            .starts_with("📅 New Moon Meditation\n📍 Main Hall\n🕐 7:00 PM\n\n"));
        assert!(payload.text.ends_with(EVENT_FOOTER));

        event.location = None;
        let payload = event_payload(&event, "u");
        assert!(payload.text.starts_with("📅 New Moon Meditation\n🕐 7:00 PM"));
    }

    #[test]
    fn app_fallback_appends_url() {
        let payload = app_payload(Section::Calendar, "https://spiritualwisdom.app");
        assert_eq!(payload.title, "Spiritual Calendar");
        assert!(payload.fallback.ends_with("\n\nhttps://spiritualwisdom.app"));
    }
}
