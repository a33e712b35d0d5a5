use shared::Badge;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub badge: Badge,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", "font-medium", props.badge.classes())}>
            {&props.badge.label}
        </span>
    }
}
