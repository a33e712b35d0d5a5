use shared::{ProfileData, ProfileField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileEditorProps {
    /// Values to show: the draft while editing, the saved profile otherwise.
    pub profile: ProfileData,
    pub editing: bool,
    pub on_edit: Callback<()>,
    pub on_field_change: Callback<(ProfileField, String)>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn field_input(field: ProfileField, value: &str, on_change: &Callback<(ProfileField, String)>) -> Html {
    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

    if field.is_multiline() {
        let on_change = on_change.clone();
        html! {
            <textarea
                id={field.key()}
                name={field.key()}
                rows="4"
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let target: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit((field, target.value()));
                })}
                class={input_class}
            />
        }
    } else {
        let on_change = on_change.clone();
        html! {
            <input
                id={field.key()}
                name={field.key()}
                type={field.input_type()}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((field, target.value()));
                })}
                class={input_class}
            />
        }
    }
}

fn field_value(field: ProfileField, value: &str) -> Html {
    if value.is_empty() {
        return html! { <p class="text-gray-400 italic">{"Not set"}</p> };
    }
    match field {
        ProfileField::Linkedin | ProfileField::Github => html! {
            <a href={value.to_string()} target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline break-all">
                {value}
            </a>
        },
        _ => html! { <p class="text-gray-900 whitespace-pre-line">{value}</p> },
    }
}

#[function_component(ProfileEditor)]
pub fn profile_editor(props: &ProfileEditorProps) -> Html {
    let profile = &props.profile;

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-900">{"Profile Information"}</h2>
                if !props.editing {
                    <button
                        onclick={props.on_edit.reform(|_| ())}
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition-colors"
                    >
                        {"Edit Profile"}
                    </button>
                }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <label class="block text-sm font-medium text-gray-600">{"Email"}</label>
                    <p class="text-gray-900">{&profile.email}</p>
                    <p class="text-xs text-gray-500 mt-1">{"Email is managed by your sign-in account"}</p>
                </div>
                {for ProfileField::ALL.iter().map(|field| {
                    let field = *field;
                    let value = profile.get(field);
                    html! {
                        <div class={classes!(field.is_multiline().then_some("md:col-span-2"))}>
                            <label for={field.key()} class="block text-sm font-medium text-gray-600 mb-2">{field.label()}</label>
                            if props.editing {
                                {field_input(field, value, &props.on_field_change)}
                            } else {
                                {field_value(field, value)}
                            }
                        </div>
                    }
                })}
            </div>

            if props.editing {
                <div class="flex space-x-3 mt-6">
                    <button
                        onclick={props.on_save.reform(|_| ())}
                        class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 transition-colors"
                    >
                        {"Save"}
                    </button>
                    <button
                        onclick={props.on_cancel.reform(|_| ())}
                        class="px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                </div>
            }
        </div>
    }
}
