//! Inline info/error banner used by forms and list pages.

use leptos::prelude::*;

/// Shows `error` in the error style, otherwise `info`, otherwise nothing.
#[component]
pub fn StatusMessage(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, optional)] info: Option<Signal<Option<String>>>,
) -> impl IntoView {
    move || {
        if let Some(message) = error.get() {
            return Some(view! { <p class="status status--error">{message}</p> }.into_any());
        }
        info.and_then(|info| info.get())
            .map(|message| view! { <p class="status status--info">{message}</p> }.into_any())
    }
}
