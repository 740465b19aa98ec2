//! Route guard applying the role gate to protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route in `App` wraps its page in [`Guarded`], so all
//! routes share one redirect rule: anonymous visitors go to `/login`, signed-in
//! users without the route's role go to `/401`. The decision itself comes
//! from `access::authorize` over the static route table.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use access::{Page, RouteTable, Session, authorize};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionProvider, use_session};

/// Where a visit to `page` must be redirected, if anywhere.
pub fn gate_redirect(page: Page, session: Option<&Session>) -> Option<&'static str> {
    let rule = RouteTable::standard().rule_for(page)?;
    let required = rule.required_roles()?;
    authorize(required, session).redirect_target()
}

/// Replace the current route whenever the gate denies `page`.
pub fn install_gate_redirect<F>(session: SessionProvider, page: Page, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let current = session.get();
        if let Some(target) = gate_redirect(page, current.as_ref()) {
            log::debug!("gate denied {page:?}; redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Render `children` only while the gate admits the current session.
#[component]
pub fn Guarded(page: Page, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_gate_redirect(session, page, use_navigate());

    let allowed = move || gate_redirect(page, session.get().as_ref()).is_none();
    move || {
        if allowed() {
            children().into_any()
        } else {
            view! { <p class="page-message">"Redirecting..."</p> }.into_any()
        }
    }
}

/// Redirect a signed-in visitor away from pages meant for anonymous users.
pub fn install_signed_in_redirect<F>(session: SessionProvider, target: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.is_signed_in() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
