//! Login page: username + password against the backend's Basic-auth login.
//!
//! Reachable while signed in; a new login replaces the stored session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use access::Session;
use access::routes::{PROFILE_PATH, REGISTER_PATH};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::status_message::StatusMessage;
use crate::net::api::use_api;
use crate::state::session::use_session;

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Banner shown when the visitor already has a session.
pub(crate) fn signed_in_notice(session: Option<&Session>) -> Option<String> {
    session.map(|s| {
        format!(
            "Signed in as {} ({}). Signing in again replaces this session.",
            s.display_name(),
            s.role
        )
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let logged_in = RwSignal::new(false);

    Effect::new(move || {
        if logged_in.get() {
            navigate(PROFILE_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.login(&user, &pass).await {
                Ok(_) => logged_in.set(true),
                Err(e) => error.set(Some(e.user_message().to_owned())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, user, pass);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <StatusMessage error=error info=Signal::derive(move || signed_in_notice(session.get().as_ref()))/>
                <p class="login-card__footer">
                    "No account yet? "
                    <A href=REGISTER_PATH>"Create one"</A>
                </p>
            </div>
        </div>
    }
}
