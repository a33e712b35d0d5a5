use gloo_storage::{LocalStorage, Storage};
use shared::{EditPolicy, StaticCatalog};

pub struct Config;

impl Config {
    /// Local storage key holding the signed-in identity as JSON.
    pub const IDENTITY_KEY: &'static str = "identity";
    /// Local storage key selecting the profile edit policy.
    pub const EDIT_POLICY_KEY: &'static str = "edit_policy";

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Edit policy from local storage, draft/commit unless overridden.
    pub fn edit_policy() -> EditPolicy {
        let raw = LocalStorage::raw().get_item(Self::EDIT_POLICY_KEY).ok().flatten();
        Self::parse_edit_policy(raw.as_deref())
    }

    pub fn parse_edit_policy(raw: Option<&str>) -> EditPolicy {
        match raw.map(str::trim) {
            Some("live") | Some("live_edit") => EditPolicy::LiveEdit,
            Some("draft") | Some("draft_commit") | None => EditPolicy::DraftCommit,
            Some(other) => {
                log::warn!("Unknown edit policy {:?}, using draft/commit", other);
                EditPolicy::DraftCommit
            }
        }
    }

    /// Appointments and sessions shown until a backing service is wired in.
    pub fn catalog() -> StaticCatalog {
        StaticCatalog::seeded()
    }
}
