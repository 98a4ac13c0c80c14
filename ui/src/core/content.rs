//! Read-only devotional content: quotes, videos, events and the teacher profile.
//!
//! Pages never mutate what they receive here. `StaticContent` is the bundled
//! provider; another source only has to implement [`ContentProvider`].

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;
use time::macros::{date, format_description};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    pub reflection: Option<String>,
    pub date: Date,
}

impl Quote {
    /// Date label in the `Mon Jan 15 2024` style used on the quote cards.
    pub fn date_label(&self) -> String {
        self.date
            .format(&format_description!(
                "[weekday repr:short] [month repr:short] [day] [year]"
            ))
            .unwrap_or_else(|_| self.date.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub youtube_id: String,
    pub duration: String,
    pub description: String,
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://youtube.com/watch?v={}", self.youtube_id)
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?autoplay=1", self.youtube_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Meditation,
    Teaching,
    Celebration,
    Retreat,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Meditation,
        EventKind::Teaching,
        EventKind::Celebration,
        EventKind::Retreat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meditation => "meditation",
            Self::Teaching => "teaching",
            Self::Celebration => "celebration",
            Self::Retreat => "retreat",
        }
    }

    /// Badge modifier class for the event type.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Meditation => "badge badge--meditation",
            Self::Teaching => "badge badge--teaching",
            Self::Celebration => "badge badge--celebration",
            Self::Retreat => "badge badge--retreat",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type `{0}`")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: Date,
    /// Display time as published, e.g. `7:00 PM`.
    pub time: String,
    pub description: String,
    pub location: Option<String>,
    pub image: Option<String>,
    pub kind: EventKind,
}

impl Event {
    /// Numeric date label, e.g. `1/15/2024`.
    pub fn date_label(&self) -> String {
        format!(
            "{}/{}/{}",
            u8::from(self.date.month()),
            self.date.day(),
            self.date.year()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teaching {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherProfile {
    pub name: String,
    pub tagline: String,
    /// Opening paragraph; its first letter is rendered as a drop cap.
    pub introduction: String,
    pub paragraphs: Vec<String>,
    pub featured_quote: String,
    pub teachings: Vec<Teaching>,
    pub closing: String,
    pub closing_quote: String,
}

impl TeacherProfile {
    /// Splits the introduction into its drop-cap letter and the remainder.
    pub fn drop_cap(&self) -> (String, &str) {
        let mut chars = self.introduction.chars();
        match chars.next() {
            Some(first) => (first.to_string(), chars.as_str()),
            None => (String::new(), ""),
        }
    }
}

pub trait ContentProvider {
    fn list_quotes(&self) -> Vec<Quote>;
    fn list_videos(&self) -> Vec<Video>;
    fn list_events(&self) -> Vec<Event>;
    fn teacher_profile(&self) -> TeacherProfile;
}

/// Shared handle placed in context at the composition root.
#[derive(Clone)]
pub struct Content(Rc<dyn ContentProvider>);

impl Content {
    pub fn new(provider: impl ContentProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl Deref for Content {
    type Target = dyn ContentProvider;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// The content bundled with the app.
#[derive(Debug, Clone, Copy)]
pub struct StaticContent {
    /// Date stamped on the daily quotes.
    today: Date,
}

impl StaticContent {
    pub fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::new(OffsetDateTime::now_utc().date())
    }
}

const SAMPLE_YOUTUBE_ID: &str = "dQw4w9WgXcQ";

fn video(id: &str, title: &str, duration: &str, description: &str) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail: format!("https://img.youtube.com/vi/{SAMPLE_YOUTUBE_ID}/maxresdefault.jpg"),
        youtube_id: SAMPLE_YOUTUBE_ID.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
    }
}

impl ContentProvider for StaticContent {
    fn list_quotes(&self) -> Vec<Quote> {
        let quote = |id: &str, text: &str, author: &str, reflection: &str| Quote {
            id: id.to_string(),
            text: text.to_string(),
            author: author.to_string(),
            reflection: Some(reflection.to_string()),
            date: self.today,
        };

        vec![
            quote(
                "1",
                "The mind is everything. What you think you become.",
                "Buddha",
                "How can you cultivate positive thoughts today?",
            ),
            quote(
                "2",
                "In the depth of silence is the voice of God.",
                "Gurudev",
                "Take a moment to sit in silence and listen within.",
            ),
            quote(
                "3",
                "When you realize there is nothing lacking, the whole world belongs to you.",
                "Lao Tzu",
                "What abundance already exists in your life?",
            ),
        ]
    }

    fn list_videos(&self) -> Vec<Video> {
        vec![
            video(
                "1",
                "Morning Meditation Practice",
                "10:30",
                "Start your day with peace and mindfulness",
            ),
            video(
                "2",
                "The Power of Gratitude",
                "15:45",
                "Transform your life through grateful awareness",
            ),
            video(
                "3",
                "Finding Inner Peace",
                "20:15",
                "Discover the sanctuary within your own heart",
            ),
        ]
    }

    fn list_events(&self) -> Vec<Event> {
        vec![
            Event {
                id: "1".into(),
                title: "New Moon Meditation".into(),
                date: date!(2024 - 01 - 15),
                time: "7:00 PM".into(),
                description: "Join us for a powerful new moon meditation to set intentions for the lunar cycle ahead. We will practice breath awareness and silent contemplation.".into(),
                location: Some("Main Hall".into()),
                image: None,
                kind: EventKind::Meditation,
            },
            Event {
                id: "2".into(),
                title: "Vedanta Philosophy Talk".into(),
                date: date!(2024 - 01 - 22),
                time: "6:30 PM".into(),
                description: "Explore the profound teachings of Vedanta philosophy and its practical applications in daily life. Discover the nature of reality and consciousness.".into(),
                location: Some("Teaching Hall".into()),
                image: None,
                kind: EventKind::Teaching,
            },
            Event {
                id: "3".into(),
                title: "Diwali Celebration".into(),
                date: date!(2024 - 02 - 14),
                time: "5:00 PM".into(),
                description: "Celebrate the festival of lights with traditional prayers, music, and community feast. Join us in spreading joy and divine light.".into(),
                location: Some("Community Center".into()),
                image: None,
                kind: EventKind::Celebration,
            },
        ]
    }

    fn teacher_profile(&self) -> TeacherProfile {
        TeacherProfile {
            name: "Gurudev".into(),
            tagline: "A beacon of wisdom and compassion".into(),
            introduction: "In the sacred tradition of spiritual awakening, our beloved Gurudev stands as a living embodiment of divine wisdom and unconditional love. For over three decades, he has dedicated his life to guiding souls on their journey toward inner peace and self-realization.".into(),
            paragraphs: vec![
                "Born into a family of spiritual seekers, Gurudev's path was illuminated from an early age. His profound understanding of ancient Vedantic teachings, combined with a deep compassion for all beings, has touched millions of hearts across the globe.".into(),
                "Through his teachings, Gurudev emphasizes the practical application of spiritual principles in daily life. His approach bridges the ancient wisdom of the East with the practical needs of modern living, making profound truths accessible to seekers from all walks of life.".into(),
                "His ashram serves as a sanctuary where thousands come seeking solace, wisdom, and spiritual guidance. The transformative power of his presence and teachings continues to inspire a global community of practitioners committed to inner growth and service to humanity.".into(),
            ],
            featured_quote: "The purpose of life is not to be happy, but to be useful, to be honorable, to be compassionate, to have it make some difference that you have lived and lived well.".into(),
            teachings: vec![
                Teaching {
                    title: "Meditation".into(),
                    summary: "The path to inner silence and self-discovery".into(),
                },
                Teaching {
                    title: "Service".into(),
                    summary: "Selfless action as spiritual practice".into(),
                },
                Teaching {
                    title: "Wisdom".into(),
                    summary: "Ancient knowledge for modern living".into(),
                },
            ],
            closing: "Today, Gurudev's mission continues to expand, reaching new generations of seekers through technology while maintaining the timeless essence of spiritual transmission. His message remains simple yet profound:".into(),
            closing_quote: "Find the divine within yourself, and you will see it everywhere.".into(),
        }
    }
}
