use std::rc::Rc;

use shared::{Appointment, ListItem, ListView, Session};
use yew::prelude::*;

use crate::components::status_badge::StatusBadge;

fn render_list<T: ListItem>(heading: &str, items: &[T]) -> Html {
    let view = ListView::new(items);

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{heading}</h2>
            if let Some(placeholder) = view.placeholder() {
                <p class="text-gray-500 text-center py-8">{placeholder}</p>
            } else {
                <ul class="space-y-4">
                    {for view.rows().map(|row| html! {
                        <li key={row.id.clone()} class="border border-gray-200 rounded-lg p-4 flex justify-between items-start">
                            <div>
                                <h3 class="text-lg font-medium text-gray-900">{&row.title}</h3>
                                {for row.details.iter().map(|detail| html! {
                                    <p class="text-sm text-gray-600">
                                        <span class="font-medium">{format!("{}: ", detail.label)}</span>
                                        {&detail.value}
                                    </p>
                                })}
                            </div>
                            <StatusBadge badge={row.badge.clone()} />
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppointmentsTabProps {
    pub appointments: Rc<Vec<Appointment>>,
}

#[function_component(AppointmentsTab)]
pub fn appointments_tab(props: &AppointmentsTabProps) -> Html {
    render_list("My Appointments", props.appointments.as_slice())
}

#[derive(Properties, PartialEq)]
pub struct SessionsTabProps {
    pub sessions: Rc<Vec<Session>>,
}

#[function_component(SessionsTab)]
pub fn sessions_tab(props: &SessionsTabProps) -> Html {
    render_list("My Sessions", props.sessions.as_slice())
}
