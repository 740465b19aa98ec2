//! Profile page for any signed-in user, with sign-out.
//!
//! Signing out clears the session; the route guard around this page then
//! sends the visitor to `/login`.

use leptos::prelude::*;

use crate::net::api::use_api;
use crate::state::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            api.logout().await;
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = api;
            session.sign_out();
            busy.set(false);
        }
    };

    view! {
        <div class="profile-page">
            {move || {
                session
                    .get()
                    .map(|s| {
                        view! {
                            <div class="profile-card">
                                <h1>{s.display_name().to_owned()}</h1>
                                <dl class="profile-card__fields">
                                    <dt>"User ID"</dt>
                                    <dd>{s.id}</dd>
                                    <dt>"Username"</dt>
                                    <dd>{s.username.clone()}</dd>
                                    <dt>"Role"</dt>
                                    <dd>{s.role.as_str()}</dd>
                                </dl>
                            </div>
                        }
                    })
            }}
            <button class="button button--secondary" on:click=on_logout disabled=move || busy.get()>
                "Sign Out"
            </button>
        </div>
    }
}
