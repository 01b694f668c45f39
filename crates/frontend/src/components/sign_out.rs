//! Sign-out button

use yew::prelude::*;

use crate::identity::use_identity;
use crate::services::session;

#[function_component(SignOutButton)]
pub fn sign_out_button() -> Html {
    let identity = use_identity();

    let on_click = {
        let store = identity.store.clone();
        Callback::from(move |_: MouseEvent| session::sign_out(&store))
    };

    html! {
        <button
            onclick={on_click}
            class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
        >
            {"Sign out"}
        </button>
    }
}
