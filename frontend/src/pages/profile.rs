use std::rc::Rc;

use log::{debug, error};
use shared::{Catalog, DashboardAction, ProfileField, StaticCatalog, Tab};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::profile::list_tab::{AppointmentsTab, SessionsTab};
use crate::components::profile::profile_editor::ProfileEditor;
use crate::components::profile::profile_tabs::ProfileTabs;
use crate::config::Config;
use crate::state::{DashboardStore, StoreHandle};

fn default_catalog() -> Rc<StaticCatalog> {
    Rc::new(Config::catalog())
}

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    #[prop_or_else(default_catalog)]
    pub catalog: Rc<StaticCatalog>,
    #[prop_or_default]
    pub store: StoreHandle,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let dashboard = use_reducer_eq(move || DashboardStore::new(&auth, Config::edit_policy()));

    let appointments = use_memo(props.catalog.clone(), |catalog| catalog.appointments());
    let sessions = use_memo(props.catalog.clone(), |catalog| catalog.sessions());

    use_effect_with((), |_| {
        gloo_utils::document().set_title("My Profile");
        || ()
    });

    let on_tab_click = {
        let dashboard = dashboard.clone();
        Callback::from(move |tab: Tab| {
            debug!("Switching to {:?} tab", tab);
            dashboard.dispatch(DashboardAction::SelectTab(tab));
        })
    };

    let on_edit = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.dispatch(DashboardAction::StartEditing))
    };

    let on_field_change = {
        let dashboard = dashboard.clone();
        Callback::from(move |(field, value): (ProfileField, String)| {
            dashboard.dispatch(DashboardAction::UpdateField {
                key: field.key().to_string(),
                value,
            });
        })
    };

    let on_save = {
        let dashboard = dashboard.clone();
        let store = props.store.clone();
        Callback::from(move |_| {
            if !dashboard.state.is_editing() {
                return;
            }
            let profile = dashboard.state.form().clone();
            dashboard.dispatch(DashboardAction::Save);

            let store = store.clone();
            spawn_local(async move {
                if let Err(e) = store.0.save(&profile).await {
                    error!("Failed to save profile: {}", e);
                }
            });
        })
    };

    let on_cancel = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.dispatch(DashboardAction::Cancel))
    };

    let state = &dashboard.state;
    let header = state.profile();

    html! {
        <div class="container mx-auto px-4 py-8 max-w-5xl">
            <div class="bg-white shadow rounded-lg p-6 mb-6 flex items-center space-x-4">
                <div class="w-16 h-16 rounded-full bg-blue-600 text-white flex items-center justify-center text-2xl font-bold">
                    {header.initials()}
                </div>
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{header.display_name()}</h1>
                    <p class="text-gray-600">{&header.email}</p>
                </div>
            </div>

            <ProfileTabs
                current_tab={state.active_tab()}
                on_tab_click={on_tab_click}
            />

            <div class="mt-6">
                {match state.active_tab() {
                    Tab::Profile => html! {
                        <ProfileEditor
                            profile={state.form().clone()}
                            editing={state.is_editing()}
                            on_edit={on_edit}
                            on_field_change={on_field_change}
                            on_save={on_save}
                            on_cancel={on_cancel}
                        />
                    },
                    Tab::Appointments => html! {
                        <AppointmentsTab appointments={appointments.clone()} />
                    },
                    Tab::Sessions => html! {
                        <SessionsTab sessions={sessions.clone()} />
                    },
                }}
            </div>
        </div>
    }
}
