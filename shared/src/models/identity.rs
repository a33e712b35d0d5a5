use serde::{Deserialize, Serialize};

/// Who is signed in, as reported by the authentication collaborator.
///
/// Both fields may be absent; consumers treat a missing value as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Read-only access to the current identity.
pub trait IdentityProvider {
    fn identity(&self) -> Identity;
}

impl IdentityProvider for Identity {
    fn identity(&self) -> Identity {
        self.clone()
    }
}

impl<T: IdentityProvider> IdentityProvider for Option<T> {
    fn identity(&self) -> Identity {
        self.as_ref().map(IdentityProvider::identity).unwrap_or_default()
    }
}
