//! Admin form buffers and their validation.
//!
//! Drafts hold raw input exactly as typed. `validate` is the only way to get a
//! submission, so nothing incomplete ever reaches the publisher.

use std::fmt;

use thiserror::Error;
use time::macros::format_description;
use time::{Date, Time};

use crate::core::content::EventKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    QuoteText,
    Author,
    Title,
    Date,
    Time,
    Description,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Self::QuoteText => "quote-text",
            Self::Author => "quote-author",
            Self::Title => "event-title",
            Self::Date => "event-date",
            Self::Time => "event-time",
            Self::Description => "event-description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.id())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", join(.0))]
    Missing(Vec<Field>),

    #[error("`{0}` is not in the expected format")]
    Malformed(Field),
}

impl FormError {
    /// Every field the notice should point at.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::Missing(fields) => fields.clone(),
            Self::Malformed(field) => vec![*field],
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub text: String,
    pub author: String,
    pub reflection: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSubmission {
    pub text: String,
    pub author: String,
    pub reflection: Option<String>,
}

impl QuoteDraft {
    pub fn validate(&self) -> Result<QuoteSubmission, FormError> {
        let missing: Vec<Field> = [(Field::QuoteText, &self.text), (Field::Author, &self.author)]
            .into_iter()
            .filter(|(_, value)| blank(value))
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::Missing(missing));
        }

        Ok(QuoteSubmission {
            text: self.text.trim().to_string(),
            author: self.author.trim().to_string(),
            reflection: optional(&self.reflection),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    /// `HH:MM`, 24-hour, as produced by a time input.
    pub time: String,
    pub location: String,
    pub description: String,
    pub kind: EventKind,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            description: String::new(),
            kind: EventKind::Meditation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubmission {
    pub title: String,
    pub date: Date,
    pub time: Time,
    pub location: Option<String>,
    pub description: String,
    pub kind: EventKind,
}

impl EventSubmission {
    /// Clock label in the `7:00 PM` style used by the calendar.
    pub fn time_label(&self) -> String {
        self.time
            .format(&format_description!(
                "[hour repr:12 padding:none]:[minute] [period]"
            ))
            .unwrap_or_else(|_| self.time.to_string())
    }
}

impl EventDraft {
    pub fn validate(&self) -> Result<EventSubmission, FormError> {
        let missing: Vec<Field> = [
            (Field::Title, &self.title),
            (Field::Date, &self.date),
            (Field::Time, &self.time),
            (Field::Description, &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(FormError::Missing(missing));
        }

        let date = Date::parse(self.date.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| FormError::Malformed(Field::Date))?;
        let time = Time::parse(self.time.trim(), format_description!("[hour]:[minute]"))
            .map_err(|_| FormError::Malformed(Field::Time))?;

        Ok(EventSubmission {
            title: self.title.trim().to_string(),
            date,
            time,
            location: optional(&self.location),
            description: self.description.trim().to_string(),
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    fn filled_event() -> EventDraft {
        EventDraft {
            title: "Full Moon Satsang".into(),
            date: "2024-03-25".into(),
            time: "19:30".into(),
            location: "  ".into(),
            description: "Chanting and silence.".into(),
            kind: EventKind::Celebration,
        }
    }

    #[test]
    fn empty_quote_lists_both_required_fields() {
        let err = QuoteDraft::default().validate().unwrap_err();
        assert_eq!(err, FormError::Missing(vec![Field::QuoteText, Field::Author]));
        assert_eq!(err.to_string(), "missing required fields: quote-text, quote-author");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let draft = QuoteDraft {
            text: "   ".into(),
            author: "Rumi".into(),
            reflection: String::new(),
        };
        assert_eq!(draft.validate(), Err(FormError::Missing(vec![Field::QuoteText])));
    }

    #[test]
    fn quote_reflection_is_optional() {
        let draft = QuoteDraft {
            text: " Be still. ".into(),
            author: "Gurudev".into(),
            reflection: String::new(),
        };
        let submission = draft.validate().unwrap();
        assert_eq!(submission.text, "Be still.");
        assert_eq!(submission.reflection, None);
    }

    #[test]
    fn event_parses_date_and_time() {
        let submission = filled_event().validate().unwrap();
        assert_eq!(submission.date, date!(2024 - 03 - 25));
        assert_eq!(submission.time, time!(19:30));
        assert_eq!(submission.time_label(), "7:30 PM");
        assert_eq!(submission.location, None);
        assert_eq!(submission.kind, EventKind::Celebration);
    }

    #[test]
    fn event_missing_fields_in_form_order() {
        let draft = EventDraft {
            title: "Retreat".into(),
            ..EventDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(FormError::Missing(vec![Field::Date, Field::Time, Field::Description]))
        );
    }

    #[test]
    fn event_rejects_malformed_values() {
        let mut draft = filled_event();
        draft.date = "25/03/2024".into();
        assert_eq!(draft.validate(), Err(FormError::Malformed(Field::Date)));

        let mut draft = filled_event();
        draft.time = "7pm".into();
        assert_eq!(draft.validate(), Err(FormError::Malformed(Field::Time)));
        assert_eq!(
            FormError::Malformed(Field::Time).fields(),
            vec![Field::Time]
        );
    }

    #[test]
    fn default_event_kind_is_meditation() {
        assert_eq!(EventDraft::default().kind, EventKind::Meditation);
    }
}
