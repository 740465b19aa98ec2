//! Registration page. New accounts are always created as students.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use access::NewUser;
use access::routes::{LOGIN_PATH, PROFILE_PATH};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::status_message::StatusMessage;
use crate::net::api::use_api;
use crate::state::session::use_session;
use crate::util::guard::install_signed_in_redirect;

pub(crate) fn validate_registration(name: &str, username: &str, password: &str) -> Result<NewUser, &'static str> {
    let name = name.trim();
    let username = username.trim();
    if name.is_empty() || username.is_empty() || password.is_empty() {
        return Err("Fill in name, username and password.");
    }
    if username.chars().any(char::is_whitespace) {
        return Err("Username cannot contain spaces.");
    }
    Ok(NewUser {
        name: name.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    install_signed_in_redirect(session, PROFILE_PATH, navigate.clone());

    Effect::new(move || {
        if registered.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = match validate_registration(&name.get(), &username.get(), &password.get()) {
            Ok(user) => user,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.register(&user).await {
                Ok(()) => registered.set(true),
                Err(e) => error.set(Some(e.user_message().to_owned())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, user);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <StatusMessage error=error/>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
