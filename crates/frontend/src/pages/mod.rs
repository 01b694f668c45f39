mod editor;
mod home;
mod login;
mod profile;

pub use editor::EditorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-2xl font-bold">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"Back to start"}
            </Link<Route>>
        </div>
    }
}
