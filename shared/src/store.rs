use async_trait::async_trait;
use crate::error::Result;
use crate::models::profile::ProfileData;

/// Destination for a profile once the user saves it.
#[async_trait(?Send)]
pub trait ProfileStore {
    async fn save(&self, profile: &ProfileData) -> Result<()>;
}

/// Accepts every save and keeps nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopProfileStore;

#[async_trait(?Send)]
impl ProfileStore for NoopProfileStore {
    async fn save(&self, profile: &ProfileData) -> Result<()> {
        log::debug!("Profile for {:?} saved (no backing store)", profile.email);
        Ok(())
    }
}
