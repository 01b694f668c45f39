use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::SignOutButton;
use crate::identity::use_identity;
use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let identity = use_identity();
    let status = match (&identity.state.user, identity.state.settled) {
        (_, false) => "Checking session...".to_string(),
        (None, true) => "Not signed in".to_string(),
        (Some(user), true) => format!(
            "Signed in as {}",
            user.email.as_deref().unwrap_or(&user.uid)
        ),
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                {"Gatehouse"}
            </h1>
            <p class="text-gray-600 dark:text-gray-400">{status}</p>
            <nav class="flex gap-4">
                <Link<Route> to={Route::Editor} classes="text-blue-600 hover:underline">{"Editor"}</Link<Route>>
                <Link<Route> to={Route::Profile} classes="text-blue-600 hover:underline">{"Profile"}</Link<Route>>
            </nav>
            if identity.state.is_authenticated() {
                <SignOutButton />
            }
        </div>
    }
}
