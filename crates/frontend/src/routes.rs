//! Client-side routes

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth_guard::{AuthGate, RequireAuth};
use crate::pages::{EditorPage, HomePage, LoginPage, NotFoundPage, ProfilePage};

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/editor")]
    Editor,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Editor => html! {
            <RequireAuth>
                <EditorPage />
            </RequireAuth>
        },
        Route::Profile => html! {
            <AuthGate require_verified=true>
                <ProfilePage />
            </AuthGate>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
