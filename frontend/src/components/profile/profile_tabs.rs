use shared::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileTabsProps {
    pub current_tab: Tab,
    pub on_tab_click: Callback<Tab>,
}

#[function_component(ProfileTabs)]
pub fn profile_tabs(props: &ProfileTabsProps) -> Html {
    html! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex space-x-8" role="tablist">
                {Tab::ALL.iter().map(|tab| {
                    let is_active = props.current_tab == *tab;
                    let tab_click = props.on_tab_click.clone();

                    html! {
                        <button
                            role="tab"
                            aria-selected={is_active.to_string()}
                            class={classes!(
                                "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                if is_active {
                                    classes!("border-blue-500", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                }
                            )}
                            onclick={let tab = *tab; Callback::from(move |_| tab_click.emit(tab))}
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}
