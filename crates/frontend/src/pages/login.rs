//! Login page
//!
//! Consumes the login route contract: signs the user in, handles the
//! `verify=1` variant, and returns to `next` once the request is satisfied.

use gatehouse_core::{CoreError, LoginQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

use crate::components::Spinner;
use crate::identity::use_identity;
use crate::services::session;

/// Convert provider errors to user-friendly messages
pub fn friendly_error(error: &CoreError) -> String {
    match error {
        CoreError::Rejected { message }
            if ["INVALID_LOGIN_CREDENTIALS", "INVALID_PASSWORD", "EMAIL_NOT_FOUND"]
                .iter()
                .any(|code| message.starts_with(code)) =>
        {
            "Incorrect email or password.".to_string()
        }
        CoreError::Rejected { message } if message.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") => {
            "Too many attempts. Please try again later.".to_string()
        }
        CoreError::Rejected { message } if message.starts_with("USER_DISABLED") => {
            "This account has been disabled.".to_string()
        }
        other => other.to_string(),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let identity = use_identity();
    let location = use_location();
    let query = location
        .as_ref()
        .map(|location| LoginQuery::parse(location.query_str()))
        .unwrap_or_default();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Go back to where the guard sent us from once the request is satisfied
    {
        let ready = query.ready_to_return(&identity.state);
        let target = query.return_target().to_string();
        use_effect_with((ready, target), |(ready, target)| {
            if *ready {
                tracing::debug!(return_to = %target, "Login satisfied, returning");
                BrowserHistory::new().replace(target.as_str());
            }
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let store = identity.store.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let store = store.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                if let Err(err) = session::sign_in(&store, email.trim(), &password).await {
                    tracing::warn!(error = %err, "Sign-in failed");
                    error.set(Some(friendly_error(&err)));
                }
                busy.set(false);
            });
        })
    };

    let on_resend = {
        let notice = notice.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let notice = notice.clone();
            let error = error.clone();
            spawn_local(async move {
                match session::send_verification_email().await {
                    Ok(()) => notice.set(Some("Verification email sent.".to_string())),
                    Err(err) => error.set(Some(friendly_error(&err))),
                }
            });
        })
    };

    let on_recheck = {
        let store = identity.store.clone();
        let notice = notice.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            let notice = notice.clone();
            let error = error.clone();
            spawn_local(async move {
                match session::refresh(&store).await {
                    Ok(()) if !store.snapshot().is_verified() => {
                        notice.set(Some("Your email is not verified yet.".to_string()));
                    }
                    Ok(()) => {}
                    Err(err) => error.set(Some(friendly_error(&err))),
                }
            });
        })
    };

    let state = &identity.state;
    let body = if !state.settled {
        html! { <Spinner text={"Checking authentication...".to_string()} /> }
    } else if query.ready_to_return(state) {
        html! { <Spinner text={"Redirecting...".to_string()} /> }
    } else if state.is_authenticated() {
        // Signed in but the request asked for a verified email
        let address = state
            .user
            .as_ref()
            .and_then(|user| user.email.clone())
            .unwrap_or_else(|| "your address".to_string());
        html! {
            <div class="space-y-4">
                <h2 class="text-xl font-semibold">{"Verify your email"}</h2>
                <p class="text-gray-600 dark:text-gray-400">
                    {format!("This page requires a verified email. Follow the link we sent to {address}, then continue.")}
                </p>
                <div class="flex gap-3">
                    <button class="px-4 py-2 rounded-lg bg-blue-600 text-white" onclick={on_recheck}>
                        {"I've verified my email"}
                    </button>
                    <button class="px-4 py-2 rounded-lg bg-gray-100 dark:bg-gray-700" onclick={on_resend}>
                        {"Resend email"}
                    </button>
                </div>
            </div>
        }
    } else {
        html! {
            <form class="space-y-4" onsubmit={on_submit}>
                <h2 class="text-xl font-semibold">{"Sign in"}</h2>
                if query.verify {
                    <p class="text-sm text-amber-600">{"A verified email is required to continue."}</p>
                }
                <input
                    class="w-full px-3 py-2 rounded-lg border"
                    type="email"
                    placeholder="Email"
                    autocomplete="username"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <input
                    class="w-full px-3 py-2 rounded-lg border"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button
                    class="w-full px-4 py-2 rounded-lg bg-blue-600 text-white disabled:opacity-50"
                    type="submit"
                    disabled={*busy}
                >
                    { if *busy { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-2xl shadow p-8 space-y-4">
                { body }
                if let Some(message) = &*notice {
                    <p class="text-sm text-green-600">{message}</p>
                }
                if let Some(message) = &*error {
                    <p class="text-sm text-red-600">{message}</p>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_error_for_bad_credentials() {
        let err = CoreError::rejected("INVALID_LOGIN_CREDENTIALS");
        assert_eq!(friendly_error(&err), "Incorrect email or password.");
        let err = CoreError::rejected("TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled");
        assert_eq!(friendly_error(&err), "Too many attempts. Please try again later.");
    }

    #[test]
    fn test_friendly_error_passes_through_other_errors() {
        let err = CoreError::provider("503 Service Unavailable");
        assert_eq!(friendly_error(&err), err.to_string());
    }
}
