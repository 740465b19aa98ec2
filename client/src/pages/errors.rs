//! Fallback pages for unknown routes and refused access.

use access::routes::{HOME_PATH, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=HOME_PATH>"Back to courses"</A>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"401"</h1>
            <p>"Your account is not allowed to open this page."</p>
            <A href=HOME_PATH>"Back to courses"</A>
            " or "
            <A href=LOGIN_PATH>"sign in as another user"</A>
        </div>
    }
}
