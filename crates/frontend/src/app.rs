use gatehouse_core::IdentityStore;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::identity::IdentityProvider;
use crate::routes::{Route, switch};
use crate::services::session;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| IdentityStore::new());

    // Resolve the stored session once at mount
    {
        let store = (*store).clone();
        use_effect_with((), move |_| {
            spawn_local(session::restore(store));
        });
    }

    html! {
        <BrowserRouter>
            <IdentityProvider store={(*store).clone()}>
                <Switch<Route> render={switch} />
            </IdentityProvider>
        </BrowserRouter>
    }
}
