use time::Month;

use crate::core::content::Event;

/// Events shown on a month card before collapsing into "+N more".
pub const PREVIEW_LIMIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    pub month: Month,
    pub year: i32,
    pub events: Vec<Event>,
}

impl MonthGroup {
    pub fn preview(&self) -> &[Event] {
        &self.events[..self.events.len().min(PREVIEW_LIMIT)]
    }

    /// Events hidden behind the preview.
    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(PREVIEW_LIMIT)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The year the month grid shows: the year of the earliest event, or
/// `fallback` when there are none.
pub fn calendar_year(events: &[Event], fallback: i32) -> i32 {
    events
        .iter()
        .map(|event| event.date)
        .min()
        .map(|date| date.year())
        .unwrap_or(fallback)
}

/// Twelve groups, January first. Events outside `year` are left out.
pub fn group_by_month(events: &[Event], year: i32) -> Vec<MonthGroup> {
    let mut month = Month::January;
    let mut groups = Vec::with_capacity(12);
    for _ in 0..12 {
        let mut in_month: Vec<Event> = events
            .iter()
            .filter(|event| event.date.year() == year && event.date.month() == month)
            .cloned()
            .collect();
        in_month.sort_by_key(|event| event.date);
        groups.push(MonthGroup {
            month,
            year,
            events: in_month,
        });
        month = month.next();
    }
    groups
}

/// Every event, soonest first. Same-day events keep their listed order.
pub fn upcoming(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.date);
    sorted
}

/// The event whose detail dialog is open, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDialog {
    selected: Option<Event>,
}

impl EventDialog {
    pub fn open(&mut self, event: Event) {
        self.selected = Some(event);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Event> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use time::Date;

    use super::*;
    use crate::core::content::{ContentProvider, EventKind, StaticContent};

    fn event(id: &str, date: Date) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            date,
            time: "7:00 PM".into(),
            description: String::new(),
            location: None,
            image: None,
            kind: EventKind::Meditation,
        }
    }

    #[test]
    fn twelve_groups_in_month_order() {
        let events = StaticContent::default().list_events();
        let groups = group_by_month(&events, 2024);
        assert_eq!(groups.len(), 12);
        assert_eq!(groups[0].month, Month::January);
        assert_eq!(groups[11].month, Month::December);
        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(groups[1].events.len(), 1);
        assert!(groups[2..].iter().all(MonthGroup::is_empty));
    }

    #[test]
    fn preview_caps_at_two_and_counts_overflow() {
        let events = vec![
            event("a", date!(2024 - 05 - 20)),
            event("b", date!(2024 - 05 - 02)),
            event("c", date!(2024 - 05 - 11)),
            event("d", date!(2024 - 05 - 30)),
        ];
        let may = &group_by_month(&events, 2024)[4];
        assert_eq!(may.preview().len(), 2);
        assert_eq!(may.preview()[0].id, "b");
        assert_eq!(may.overflow(), 2);

        let june = &group_by_month(&events, 2024)[5];
        assert!(june.preview().is_empty());
        assert_eq!(june.overflow(), 0);
    }

    #[test]
    fn other_years_are_not_grouped() {
        let events = vec![event("a", date!(2024 - 01 - 10)), event("b", date!(2025 - 01 - 10))];
        let groups = group_by_month(&events, 2024);
        assert_eq!(groups[0].events.len(), 1);
        assert_eq!(calendar_year(&events, 1999), 2024);
        assert_eq!(calendar_year(&[], 1999), 1999);
    }

    #[test]
    fn upcoming_is_sorted_by_date() {
        let events = vec![
            event("late", date!(2024 - 02 - 14)),
            event("early", date!(2024 - 01 - 15)),
        ];
        let ids: Vec<_> = upcoming(&events).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[test]
    fn dialog_opens_and_closes() {
        let mut dialog = EventDialog::default();
        assert!(!dialog.is_open());
        dialog.open(event("a", date!(2024 - 01 - 15)));
        assert_eq!(dialog.selected().map(|e| e.id.as_str()), Some("a"));
        dialog.close();
        assert!(dialog.selected().is_none());
    }
}
