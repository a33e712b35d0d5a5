//! Tab selection and the profile view/edit state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Result, SharedError};
use crate::models::identity::IdentityProvider;
use crate::models::profile::ProfileData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Profile,
    Appointments,
    Sessions,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Profile, Tab::Appointments, Tab::Sessions];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Profile => "profile",
            Tab::Appointments => "appointments",
            Tab::Sessions => "sessions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Profile => "My Profile",
            Tab::Appointments => "My Appointments",
            Tab::Sessions => "My Sessions",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::View => f.write_str("view"),
            Mode::Edit => f.write_str("edit"),
        }
    }
}

/// How field edits relate to the committed profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Edits go to a separate draft; save commits it, cancel drops it.
    #[default]
    DraftCommit,
    /// Edits write straight into the profile; cancel keeps them.
    LiveEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SelectTab(Tab),
    StartEditing,
    UpdateField { key: String, value: String },
    Save,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    active_tab: Tab,
    mode: Mode,
    policy: EditPolicy,
    profile: ProfileData,
    draft: Option<ProfileData>,
}

impl DashboardState {
    pub fn new(identity: &impl IdentityProvider, policy: EditPolicy) -> Self {
        Self {
            active_tab: Tab::Profile,
            mode: Mode::View,
            policy,
            profile: ProfileData::from_identity(&identity.identity()),
            draft: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    /// The committed profile, as shown in the page header.
    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    /// Values the profile form should display: the draft while one exists.
    pub fn form(&self) -> &ProfileData {
        self.draft.as_ref().unwrap_or(&self.profile)
    }

    pub fn apply(&mut self, action: DashboardAction) -> Result<()> {
        match action {
            DashboardAction::SelectTab(tab) => {
                self.select_tab(tab);
                Ok(())
            }
            DashboardAction::StartEditing => self.start_editing(),
            DashboardAction::UpdateField { key, value } => self.update_field(&key, value),
            DashboardAction::Save => self.save(),
            DashboardAction::Cancel => self.cancel(),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Profile && self.is_editing() {
            log::debug!("Leaving profile tab mid-edit, discarding changes");
            self.exit_edit(false);
        }
        self.active_tab = tab;
    }

    pub fn start_editing(&mut self) -> Result<()> {
        if self.active_tab != Tab::Profile || self.is_editing() {
            return Err(self.invalid("edit"));
        }
        if self.policy == EditPolicy::DraftCommit {
            self.draft = Some(self.profile.clone());
        }
        self.mode = Mode::Edit;
        Ok(())
    }

    pub fn update_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        if !self.is_editing() {
            return Err(self.invalid("update a field"));
        }
        let target = match self.draft.as_mut() {
            Some(draft) => draft,
            None => &mut self.profile,
        };
        target.set_by_key(key, value)
    }

    pub fn save(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(self.invalid("save"));
        }
        self.exit_edit(true);
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(self.invalid("cancel"));
        }
        self.exit_edit(false);
        Ok(())
    }

    fn exit_edit(&mut self, commit: bool) {
        if let Some(draft) = self.draft.take() {
            if commit {
                self.profile = draft;
            }
        }
        self.mode = Mode::View;
    }

    fn invalid(&self, action: &str) -> SharedError {
        let mode = if self.active_tab == Tab::Profile {
            self.mode.to_string()
        } else {
            format!("{} tab", self.active_tab.key())
        };
        SharedError::InvalidTransition {
            action: action.to_string(),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::Identity;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn state(policy: EditPolicy) -> DashboardState {
        DashboardState::new(&Identity::new("Ada Byron", "ada@example.com"), policy)
    }

    fn field(key: &str, value: &str) -> DashboardAction {
        DashboardAction::UpdateField {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, vec!["My Profile", "My Appointments", "My Sessions"]);
        assert_eq!(Tab::Sessions.key(), "sessions");
    }

    #[test]
    fn test_initial_state() {
        let state = state(EditPolicy::default());
        assert_eq!(state.active_tab(), Tab::Profile);
        assert_eq!(state.mode(), Mode::View);
        assert_eq!(state.profile().name, "Ada Byron");
        assert_eq!(state.policy(), EditPolicy::DraftCommit);
    }

    #[test]
    fn test_missing_identity_starts_blank() {
        let state = DashboardState::new(&None::<Identity>, EditPolicy::DraftCommit);
        assert_eq!(state.profile(), &ProfileData::default());
    }

    #[test]
    fn test_select_each_tab() {
        let mut state = state(EditPolicy::default());
        for tab in Tab::ALL {
            state.select_tab(tab);
            let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
            assert_eq!(active, vec![tab]);
        }
    }

    #[test]
    fn test_save_updates_header_name() {
        let mut state = state(EditPolicy::DraftCommit);
        state.apply(DashboardAction::StartEditing).unwrap();
        state.apply(field("name", "Ada Lovelace")).unwrap();
        assert_eq!(state.profile().name, "Ada Byron");
        assert_eq!(state.form().name, "Ada Lovelace");

        state.apply(DashboardAction::Save).unwrap();
        assert_eq!(state.mode(), Mode::View);
        assert_eq!(state.profile().display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_cancel_restores_under_draft_commit() {
        let mut state = state(EditPolicy::DraftCommit);
        state.start_editing().unwrap();
        state.update_field("bio", "Analyst").unwrap();
        state.cancel().unwrap();
        assert_eq!(state.mode(), Mode::View);
        assert_eq!(state.profile().bio, "");
        assert_eq!(state.form().bio, "");
    }

    #[test]
    fn test_cancel_keeps_typed_values_under_live_edit() {
        let mut state = state(EditPolicy::LiveEdit);
        state.start_editing().unwrap();
        state.update_field("bio", "Analyst").unwrap();
        assert_eq!(state.profile().bio, "Analyst");
        state.cancel().unwrap();
        assert_eq!(state.mode(), Mode::View);
        assert_eq!(state.profile().bio, "Analyst");
    }

    #[test]
    fn test_email_never_editable() {
        for policy in [EditPolicy::DraftCommit, EditPolicy::LiveEdit] {
            let mut state = state(policy);
            assert!(state.update_field("email", "x@example.com").is_err());
            state.start_editing().unwrap();
            let err = state.update_field("email", "x@example.com").unwrap_err();
            assert_eq!(err, SharedError::ReadOnlyField("email".to_string()));
            state.save().unwrap();
            assert_eq!(state.profile().email, "ada@example.com");
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut state = state(EditPolicy::DraftCommit);
        state.start_editing().unwrap();
        let before = state.clone();
        assert_eq!(
            state.update_field("website", "https://ada.dev"),
            Err(SharedError::UnknownField("website".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_view_mode_rejects_edit_actions() {
        let mut state = state(EditPolicy::DraftCommit);
        let before = state.clone();
        for action in [DashboardAction::Save, DashboardAction::Cancel, field("name", "x")] {
            assert!(matches!(
                state.apply(action),
                Err(SharedError::InvalidTransition { .. })
            ));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_list_tabs_have_no_edit_mode() {
        let mut state = state(EditPolicy::DraftCommit);
        state.select_tab(Tab::Sessions);
        let err = state.start_editing().unwrap_err();
        assert_eq!(err.to_string(), "Cannot edit while in sessions tab mode");
        assert_eq!(state.mode(), Mode::View);
    }

    #[test]
    fn test_leaving_profile_tab_discards_draft() {
        let mut state = state(EditPolicy::DraftCommit);
        state.start_editing().unwrap();
        state.update_field("phone", "555-0100").unwrap();
        state.select_tab(Tab::Appointments);
        assert_eq!(state.mode(), Mode::View);
        assert_eq!(state.profile().phone, "");

        state.select_tab(Tab::Profile);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_double_edit_rejected() {
        let mut state = state(EditPolicy::DraftCommit);
        state.start_editing().unwrap();
        assert!(state.start_editing().is_err());
        assert!(state.is_editing());
    }

    fn arb_action() -> impl Strategy<Value = DashboardAction> {
        let keys = prop::sample::select(vec!["name", "email", "phone", "linkedin", "github", "bio", "nope"]);
        prop_oneof![
            prop::sample::select(Tab::ALL.to_vec()).prop_map(DashboardAction::SelectTab),
            Just(DashboardAction::StartEditing),
            (keys, "[a-z ]{0,8}").prop_map(|(key, value)| DashboardAction::UpdateField {
                key: key.to_string(),
                value,
            }),
            Just(DashboardAction::Save),
            Just(DashboardAction::Cancel),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(actions in prop::collection::vec(arb_action(), 0..40)) {
            for policy in [EditPolicy::DraftCommit, EditPolicy::LiveEdit] {
                let mut state = state(policy);
                for action in actions.clone() {
                    let _ = state.apply(action);
                    prop_assert!(!state.is_editing() || state.active_tab() == Tab::Profile);
                    prop_assert_eq!(state.profile().email.as_str(), "ada@example.com");
                    prop_assert_eq!(state.form().email.as_str(), "ada@example.com");
                    prop_assert_eq!(Tab::ALL.iter().filter(|t| state.is_active(**t)).count(), 1);
                }
                if state.is_editing() {
                    state.cancel().unwrap();
                }
                prop_assert_eq!(state.mode(), Mode::View);
            }
        }
    }
}
