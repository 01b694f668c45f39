use yew::prelude::*;
use web_sys::HtmlTextAreaElement;

use crate::components::SignOutButton;
use crate::identity::use_identity;

#[function_component(EditorPage)]
pub fn editor_page() -> Html {
    let identity = use_identity();
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let author = identity
        .state
        .user
        .as_ref()
        .map(|user| user.email.clone().unwrap_or_else(|| user.uid.clone()))
        .unwrap_or_default();

    html! {
        <div class="h-screen flex flex-col bg-white dark:bg-gray-900">
            <div class="p-4 bg-gray-50 dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700 flex justify-between items-center">
                <h1 class="text-xl font-bold">{"Editor"}</h1>
                <div class="flex items-center gap-3">
                    <span class="text-sm text-gray-500 dark:text-gray-400">{author}</span>
                    <SignOutButton />
                </div>
            </div>
            <textarea
                class="flex-1 p-4 font-mono bg-transparent outline-none resize-none"
                value={(*draft).clone()}
                oninput={on_input}
            />
            <div class="px-4 py-2 text-xs text-gray-500">
                {format!("{} characters", draft.chars().count())}
            </div>
        </div>
    }
}
