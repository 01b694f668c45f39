use yew::prelude::*;

use crate::components::SignOutButton;
use crate::identity::use_identity;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let identity = use_identity();
    let Some(user) = identity.state.user.as_ref() else {
        return html! {};
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-2xl shadow p-8 space-y-3">
                <h1 class="text-2xl font-bold">{"Profile"}</h1>
                <dl class="grid grid-cols-3 gap-2 text-sm">
                    <dt class="text-gray-500">{"Account"}</dt>
                    <dd class="col-span-2 font-mono">{user.uid.clone()}</dd>
                    <dt class="text-gray-500">{"Email"}</dt>
                    <dd class="col-span-2">{user.email.clone().unwrap_or_default()}</dd>
                    <dt class="text-gray-500">{"Verified"}</dt>
                    <dd class="col-span-2">{ if user.email_verified { "Yes" } else { "No" } }</dd>
                </dl>
                <SignOutButton />
            </div>
        </div>
    }
}
