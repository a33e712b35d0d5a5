use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container mx-auto px-4 py-16 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-6">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                {"Back to your dashboard"}
            </Link<Route>>
        </div>
    }
}
