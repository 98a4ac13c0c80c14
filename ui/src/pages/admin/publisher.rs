use tracing::info;

use super::forms::{EventSubmission, QuoteSubmission};
use crate::core::config::AppConfig;
use crate::core::timing;

/// One line of the admin activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub summary: String,
    pub age: String,
}

impl Activity {
    fn new(summary: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            age: age.into(),
        }
    }
}

/// Fixed feed shown under the notification card.
pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity::new("Quote published: \"The mind is everything...\"", "2 hours ago"),
        Activity::new("Event created: New Moon Meditation", "1 day ago"),
        Activity::new("Push notification sent to 1,247 users", "2 days ago"),
    ]
}

/// Entries shown in the feed; older ones fall off the end.
pub const FEED_LIMIT: usize = 5;

/// The admin activity feed, newest first, seeded with [`recent_activity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFeed {
    entries: Vec<Activity>,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self {
            entries: recent_activity(),
        }
    }
}

impl ActivityFeed {
    pub fn record(&mut self, activity: Activity) {
        self.entries.insert(0, activity);
        self.entries.truncate(FEED_LIMIT);
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }
}

fn excerpt(text: &str) -> String {
    const LIMIT: usize = 24;
    match text.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Simulated publishing backend. Every call only waits and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publisher {
    publish_delay_ms: u64,
    notify_delay_ms: u64,
}

impl Publisher {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            publish_delay_ms: config.publish_delay_ms,
            notify_delay_ms: config.notify_delay_ms,
        }
    }

    pub async fn publish_quote(&self, quote: QuoteSubmission) -> Activity {
        timing::sleep_ms(self.publish_delay_ms).await;
        info!(author = %quote.author, "quote published");
        Activity::new(
            format!("Quote published: \"{}\"", excerpt(&quote.text)),
            "just now",
        )
    }

    pub async fn create_event(&self, event: EventSubmission) -> Activity {
        timing::sleep_ms(self.publish_delay_ms).await;
        info!(
            title = %event.title,
            date = %event.date,
            time = %event.time_label(),
            kind = %event.kind,
            "event created"
        );
        Activity::new(format!("Event created: {}", event.title), "just now")
    }

    pub async fn send_daily_notification(&self) -> Activity {
        timing::sleep_ms(self.notify_delay_ms).await;
        info!("daily quote notification sent");
        Activity::new("Push notification sent", "just now")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::admin::forms::{EventDraft, QuoteDraft};

    fn publisher() -> Publisher {
        Publisher::from_config(&AppConfig::instant())
    }

    #[test]
    fn feed_is_fixed() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[1].summary, "Event created: New Moon Meditation");
    }

    #[test]
    fn feed_puts_new_activity_first_and_stays_bounded() {
        let mut feed = ActivityFeed::default();
        feed.record(Activity::new("Push notification sent", "just now"));
        assert_eq!(feed.entries().len(), 4);
        assert_eq!(feed.entries()[0].summary, "Push notification sent");

        for n in 0..4 {
            feed.record(Activity::new(format!("Event created: {n}"), "just now"));
        }
        assert_eq!(feed.entries().len(), FEED_LIMIT);
        assert_eq!(feed.entries()[0].summary, "Event created: 3");
        assert_eq!(feed.entries()[4].summary, "Push notification sent");
    }

    #[test]
    fn excerpt_truncates_long_quotes() {
        assert_eq!(excerpt("short"), "short");
        assert_eq!(
            excerpt("The mind is everything. What you think you become."),
            "The mind is everything...."
        );
    }

    #[tokio::test]
    async fn publishing_a_valid_quote_reports_activity() {
        let submission = QuoteDraft {
            text: "Be still.".into(),
            author: "Gurudev".into(),
            reflection: String::new(),
        }
        .validate()
        .unwrap();
        let activity = publisher().publish_quote(submission).await;
        assert_eq!(activity.summary, "Quote published: \"Be still.\"");
    }

    #[tokio::test]
    async fn creating_an_event_reports_its_title() {
        let submission = EventDraft {
            title: "Silent Retreat".into(),
            date: "2024-06-01".into(),
            time: "06:00".into(),
            description: "Three days of silence.".into(),
            ..EventDraft::default()
        }
        .validate()
        .unwrap();
        let activity = publisher().create_event(submission).await;
        assert_eq!(activity.summary, "Event created: Silent Retreat");
    }

    #[tokio::test]
    async fn notification_completes() {
        let activity = publisher().send_daily_notification().await;
        assert_eq!(activity.age, "just now");
    }
}
