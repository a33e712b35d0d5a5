#![cfg(not(target_arch = "wasm32"))]

use std::rc::Rc;

use frontend::components::profile::list_tab::{SessionsTab, SessionsTabProps};
use frontend::components::profile::profile_editor::{ProfileEditor, ProfileEditorProps};
use frontend::components::profile::profile_tabs::{ProfileTabs, ProfileTabsProps};
use pretty_assertions::assert_eq;
use shared::{Catalog, Identity, ProfileData, StaticCatalog, Tab};
use yew::{Callback, ServerRenderer};

fn ada() -> ProfileData {
    ProfileData::from_identity(&Identity::new("Ada Byron", "ada@example.com"))
}

async fn render_editor(editing: bool) -> String {
    ServerRenderer::<ProfileEditor>::with_props(move || ProfileEditorProps {
        profile: ada(),
        editing,
        on_edit: Callback::from(|_| ()),
        on_field_change: Callback::from(|_| ()),
        on_save: Callback::from(|_| ()),
        on_cancel: Callback::from(|_| ()),
    })
    .hydratable(false)
    .render()
    .await
}

async fn render_tabs(current_tab: Tab) -> String {
    ServerRenderer::<ProfileTabs>::with_props(move || ProfileTabsProps {
        current_tab,
        on_tab_click: Callback::from(|_| ()),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn test_view_mode_has_no_inputs() {
    let html = render_editor(false).await;

    assert!(!html.contains("<input"), "unexpected input in {html}");
    assert!(!html.contains("<textarea"), "unexpected textarea in {html}");
    assert!(html.contains("Ada Byron"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("Edit Profile"));
    assert!(html.contains("Not set"));
    assert!(!html.contains(">Save<"));
}

#[tokio::test]
async fn test_edit_mode_renders_every_field_but_email() {
    let html = render_editor(true).await;

    assert_eq!(html.matches("<input").count(), 4);
    assert_eq!(html.matches("<textarea").count(), 1);
    assert!(!html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="name""#));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains(">Save<"));
    assert!(html.contains(">Cancel<"));
    assert!(!html.contains("Edit Profile"));
}

#[tokio::test]
async fn test_exactly_one_tab_is_selected() {
    for tab in Tab::ALL {
        let html = render_tabs(tab).await;
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1, "{tab:?}: {html}");
        assert_eq!(html.matches(r#"aria-selected="false""#).count(), 2);
        for label in ["My Profile", "My Appointments", "My Sessions"] {
            assert!(html.contains(label), "missing {label}");
        }
    }
}

#[tokio::test]
async fn test_sessions_tab_heading_and_rows() {
    let sessions = StaticCatalog::seeded().sessions();
    let html = ServerRenderer::<SessionsTab>::with_props(move || SessionsTabProps {
        sessions: Rc::new(sessions),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains("My Sessions"));
    assert!(html.contains("Web Development Bootcamp"));
    assert!(html.contains("March 15, 2024 - April 15, 2024"));
    assert!(html.contains("Active"));
}
