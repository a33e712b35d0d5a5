use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::{Result, SharedError};
use crate::models::identity::Identity;

/// Profile details shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    /// Always taken from the identity; no [`ProfileField`] addresses it.
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub bio: String,
}

/// The profile fields a user may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Phone,
    Linkedin,
    Github,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Phone,
        ProfileField::Linkedin,
        ProfileField::Github,
        ProfileField::Bio,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Phone => "phone",
            ProfileField::Linkedin => "linkedin",
            ProfileField::Github => "github",
            ProfileField::Bio => "bio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Phone => "Phone",
            ProfileField::Linkedin => "LinkedIn",
            ProfileField::Github => "GitHub",
            ProfileField::Bio => "Bio",
        }
    }

    /// HTML input type hint for the field's form control.
    pub fn input_type(self) -> &'static str {
        match self {
            ProfileField::Phone => "tel",
            ProfileField::Linkedin | ProfileField::Github => "url",
            ProfileField::Name | ProfileField::Bio => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ProfileField::Bio)
    }
}

impl FromStr for ProfileField {
    type Err = SharedError;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "name" => Ok(ProfileField::Name),
            "phone" => Ok(ProfileField::Phone),
            "linkedin" => Ok(ProfileField::Linkedin),
            "github" => Ok(ProfileField::Github),
            "bio" => Ok(ProfileField::Bio),
            "email" => Err(SharedError::ReadOnlyField(key.to_string())),
            other => Err(SharedError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl ProfileData {
    /// Initial profile for a signed-in user: name and email come from the
    /// identity, everything else starts blank.
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            name: identity.name_or_empty().to_string(),
            email: identity.email_or_empty().to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Phone => &self.phone,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::Github => &self.github,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::Github => &mut self.github,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value.into();
    }

    /// Set a field addressed by its form key. Unknown keys and `email` are
    /// rejected without touching the profile.
    pub fn set_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let field = key.parse::<ProfileField>()?;
        self.set(field, value);
        Ok(())
    }

    /// Header name; "User" until a name is set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }

    /// Up to two uppercase initials for the avatar.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}
