pub mod profile {
    pub mod list_tab;
    pub mod profile_editor;
    pub mod profile_tabs;
}
pub mod status_badge;
