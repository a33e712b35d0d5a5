use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an appointment or an enrolled session.
///
/// Values outside the known set are kept verbatim in `Other` so a data
/// source can introduce new states without breaking rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Upcoming,
    Active,
    Completed,
    Cancelled,
    Other(String),
}

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Affirmative,
    Informational,
    Negative,
    Neutral,
}

impl BadgeTone {
    /// Tailwind classes used for the badge background and text color.
    pub fn classes(self) -> &'static str {
        match self {
            BadgeTone::Affirmative => "bg-green-100 text-green-800",
            BadgeTone::Informational => "bg-blue-100 text-blue-800",
            BadgeTone::Negative => "bg-red-100 text-red-800",
            BadgeTone::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Active => "active",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
            Status::Other(raw) => raw,
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Status::Upcoming | Status::Active => BadgeTone::Affirmative,
            Status::Completed => BadgeTone::Informational,
            Status::Cancelled => BadgeTone::Negative,
            Status::Other(_) => BadgeTone::Neutral,
        }
    }

    /// Display label: the wire value with its first letter capitalized.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn badge(&self) -> Badge {
        Badge {
            label: self.label(),
            tone: self.tone(),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        match raw {
            "upcoming" => Status::Upcoming,
            "active" => Status::Active,
            "completed" => Status::Completed,
            "cancelled" => Status::Cancelled,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        Status::from(raw.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered status label together with its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    pub fn classes(&self) -> &'static str {
        self.tone.classes()
    }
}
