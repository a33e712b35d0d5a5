use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::appointment::Appointment;
use crate::models::session::Session;
use crate::models::status::Status;

/// Source of the read-only collections shown on the dashboard.
pub trait Catalog {
    fn appointments(&self) -> Vec<Appointment>;
    fn sessions(&self) -> Vec<Session>;
}

/// A catalog backed by collections handed in at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl StaticCatalog {
    pub fn new(appointments: Vec<Appointment>, sessions: Vec<Session>) -> Self {
        Self { appointments, sessions }
    }

    /// Parse `{"appointments": [...], "sessions": [...]}`. Missing keys are
    /// treated as empty lists.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: StaticCatalog = serde_json::from_str(json)?;
        log::debug!(
            "Loaded catalog with {} appointments and {} sessions",
            catalog.appointments.len(),
            catalog.sessions.len()
        );
        Ok(catalog)
    }

    /// Demo data used until a real backing service is wired in.
    pub fn seeded() -> Self {
        Self::new(seed_appointments(), seed_sessions())
    }
}

impl Catalog for StaticCatalog {
    fn appointments(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    fn sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }
}

fn appointment(id: &str, title: &str, date: &str, time: &str, location: &str, status: Status) -> Appointment {
    Appointment {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        status,
    }
}

fn session(id: &str, title: &str, instructor: &str, start: &str, end: &str, status: Status) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        status,
    }
}

fn seed_appointments() -> Vec<Appointment> {
    vec![
        appointment("1", "Career Counseling Session", "2024-03-20", "14:00", "Virtual Meeting", Status::Upcoming),
        appointment("2", "Technical Interview Preparation", "2024-03-25", "10:00", "Virtual Meeting", Status::Upcoming),
    ]
}

fn seed_sessions() -> Vec<Session> {
    vec![
        session("1", "Web Development Bootcamp", "John Doe", "2024-03-15", "2024-04-15", Status::Active),
        session("2", "Data Structures and Algorithms", "Jane Smith", "2024-04-01", "2024-05-01", Status::Upcoming),
    ]
}
