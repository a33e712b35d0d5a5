use log::{debug, warn};
use shared::{DashboardAction, DashboardState, EditPolicy, IdentityProvider, NoopProfileStore, ProfileStore};
use std::fmt;
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper around the dashboard state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStore {
    pub state: DashboardState,
    /// Message from the most recent rejected action, cleared on success.
    pub last_error: Option<String>,
}

impl DashboardStore {
    pub fn new(identity: &impl IdentityProvider, policy: EditPolicy) -> Self {
        Self {
            state: DashboardState::new(identity, policy),
            last_error: None,
        }
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match state.apply(action.clone()) {
            Ok(()) => {
                debug!("Applied {:?}", action);
                Rc::new(Self {
                    state,
                    last_error: None,
                })
            }
            Err(e) => {
                warn!("Ignoring {:?}: {}", action, e);
                Rc::new(Self {
                    last_error: Some(e.to_string()),
                    ..(*self).clone()
                })
            }
        }
    }
}

/// Shared handle to the profile persistence collaborator, usable as a prop.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn ProfileStore>);

impl StoreHandle {
    pub fn new(store: impl ProfileStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new(NoopProfileStore)
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoreHandle")
    }
}
