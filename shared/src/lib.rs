pub mod models {
    pub mod appointment;
    pub mod identity;
    pub mod profile;
    pub mod session;
    pub mod status;
}

pub mod catalog;
pub mod dashboard;
pub mod date_format;
pub mod error;
pub mod listing;
pub mod store;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use models::{
    appointment::Appointment,
    identity::{Identity, IdentityProvider},
    profile::{ProfileData, ProfileField},
    session::Session,
    status::{Badge, BadgeTone, Status},
};

pub use catalog::{Catalog, StaticCatalog};
pub use dashboard::{DashboardAction, DashboardState, EditPolicy, Mode, Tab};
pub use date_format::{format_date_range, format_long_date, INVALID_DATE};
pub use listing::{Detail, ListItem, ListRow, ListView, NO_APPOINTMENTS, NO_SESSIONS};
pub use store::{NoopProfileStore, ProfileStore};
