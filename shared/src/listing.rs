//! Row models for the read-only appointment and session lists.

use crate::date_format::{format_date_range, format_long_date};
use crate::models::appointment::Appointment;
use crate::models::session::Session;
use crate::models::status::{Badge, Status};

pub const NO_APPOINTMENTS: &str = "No appointments scheduled";
pub const NO_SESSIONS: &str = "No sessions enrolled";

/// A labelled line of detail under a row's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub details: Vec<Detail>,
    pub badge: Badge,
}

/// Something that can be shown as one row of a list tab.
pub trait ListItem {
    /// Placeholder shown when a list of this item type is empty.
    const EMPTY_TEXT: &'static str;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn status(&self) -> &Status;
    fn details(&self) -> Vec<Detail>;

    fn to_row(&self) -> ListRow {
        ListRow {
            id: self.id().to_string(),
            title: self.title().to_string(),
            details: self.details(),
            badge: self.status().badge(),
        }
    }
}

impl ListItem for Appointment {
    const EMPTY_TEXT: &'static str = NO_APPOINTMENTS;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &Status {
        &self.status
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            Detail { label: "Date", value: format_long_date(&self.date) },
            Detail { label: "Time", value: self.time.clone() },
            Detail { label: "Location", value: self.location.clone() },
        ]
    }
}

impl ListItem for Session {
    const EMPTY_TEXT: &'static str = NO_SESSIONS;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &Status {
        &self.status
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            Detail { label: "Instructor", value: self.instructor.clone() },
            Detail { label: "Dates", value: format_date_range(&self.start_date, &self.end_date) },
        ]
    }
}

/// View over a borrowed collection. `rows` builds rows lazily and may be
/// called any number of times.
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a, T> {
    items: &'a [T],
}

impl<'a, T: ListItem> ListView<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The empty-state text, present only when there is nothing to list.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(T::EMPTY_TEXT)
    }

    pub fn rows(&self) -> impl Iterator<Item = ListRow> + 'a {
        self.items.iter().map(ListItem::to_row)
    }
}
