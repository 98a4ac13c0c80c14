//! Admin panel: quote and event entry, daily notification, activity feed.
//! Only rendered for admin identities; the router sends everyone else to
//! the quotes page.

pub mod forms;
pub mod publisher;
mod view;

pub use forms::{EventDraft, EventSubmission, Field, FormError, QuoteDraft, QuoteSubmission};
pub use publisher::{recent_activity, Activity, ActivityFeed, Publisher};
pub use view::AdminPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Quotes,
    Events,
    Notify,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Quotes, AdminTab::Events, AdminTab::Notify];

    pub fn id(self) -> &'static str {
        match self {
            Self::Quotes => "quotes",
            Self::Events => "events",
            Self::Notify => "notifications",
        }
    }
}
