//! Authentication guard components for protected routes

use gatehouse_core::{Decision, Guard, Placeholder};
use yew::prelude::*;

use crate::components::Spinner;
use crate::hooks::use_guard;

#[derive(Properties, PartialEq)]
pub struct GateProps {
    pub guard: Guard,
    pub children: Children,
}

/// Renders its children only when `guard` allows it
#[function_component(Gate)]
pub fn gate(props: &GateProps) -> Html {
    match use_guard(props.guard) {
        Decision::Render => html! { <>{ props.children.clone() }</> },
        Decision::Pending => match props.guard.placeholder() {
            Placeholder::Loading => html! {
                <Spinner text={"Checking authentication...".to_string()} full_screen=true />
            },
            Placeholder::Empty => html! {},
        },
        Decision::Redirect(_) => html! {},
    }
}

/// AuthGate component props
#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    pub children: Children,
    /// Also require a verified email address
    #[prop_or_default]
    pub require_verified: bool,
}

/// Gate that sends signed-out users to login with their path and query, and
/// unverified users to login with `verify=1` when `require_verified` is set
#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    html! {
        <Gate guard={Guard::auth_gate(props.require_verified)}>
            { props.children.clone() }
        </Gate>
    }
}

/// RequireAuth component props
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Simple auth guard that shows a loading indicator until the session is known
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    html! {
        <Gate guard={Guard::require_auth()}>
            { props.children.clone() }
        </Gate>
    }
}
