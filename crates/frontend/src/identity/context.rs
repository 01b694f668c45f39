//! Identity context and provider component
//!
//! [`IdentityProvider`] subscribes to an [`IdentityStore`] and re-renders its
//! subtree with the latest snapshot whenever the store publishes.

use futures::future::abortable;
use gatehouse_core::{IdentityState, IdentityStore};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Identity context data
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityContext {
    /// Latest snapshot
    pub state: IdentityState,
    /// Store the snapshot came from, for pages that publish changes
    pub store: IdentityStore,
}

/// Identity provider props
#[derive(Properties, PartialEq)]
pub struct IdentityProviderProps {
    pub store: IdentityStore,
    pub children: Children,
}

/// Identity provider component
#[function_component(IdentityProvider)]
pub fn identity_provider(props: &IdentityProviderProps) -> Html {
    let state = use_state(|| props.store.snapshot());

    // Follow the store for as long as it is mounted
    {
        let state = state.clone();
        use_effect_with(props.store.clone(), move |store| {
            let mut subscription = store.subscribe();
            state.set(subscription.snapshot());

            let (watch, handle) = abortable(async move {
                while subscription.changed().await {
                    state.set(subscription.snapshot());
                }
            });
            spawn_local(async move {
                let _ = watch.await;
            });

            move || handle.abort()
        });
    }

    let context = IdentityContext {
        state: (*state).clone(),
        store: props.store.clone(),
    };

    html! {
        <ContextProvider<IdentityContext> context={context}>
            { props.children.clone() }
        </ContextProvider<IdentityContext>>
    }
}

/// Hook to use the identity context
#[hook]
pub fn use_identity() -> IdentityContext {
    use_context::<IdentityContext>()
        .expect("IdentityContext not found. Make sure to wrap your component with IdentityProvider")
}
