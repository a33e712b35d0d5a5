use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, warn};
use shared::{Identity, IdentityProvider};
use yew::prelude::*;

use crate::config::Config;

/// Identity supplied by the sign-in flow. Read-only for the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContext {
    pub identity: Identity,
}

impl IdentityProvider for AuthContext {
    fn identity(&self) -> Identity {
        self.identity.clone()
    }
}

/// Read the stored identity. A missing or unreadable entry yields an
/// empty identity.
pub fn load_identity() -> Identity {
    match LocalStorage::get::<Identity>(Config::IDENTITY_KEY) {
        Ok(identity) => identity,
        Err(StorageError::KeyNotFound(_)) => {
            debug!("No stored identity, continuing anonymously");
            Identity::default()
        }
        Err(e) => {
            warn!("Failed to read stored identity: {}", e);
            Identity::default()
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// Overrides local storage, mainly for embedding and tests.
    #[prop_or_default]
    pub identity: Option<Identity>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let context = {
        let identity = props.identity.clone();
        use_state(move || AuthContext {
            identity: identity.unwrap_or_else(load_identity),
        })
    };

    html! {
        <ContextProvider<AuthContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
