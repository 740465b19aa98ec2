//! Home page: course catalogue with enroll actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Anyone can browse; enrolling needs a session and is refused
//! locally with a sign-in hint when there is none.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use access::{Course, Session, messages};
use leptos::prelude::*;

use crate::components::status_message::StatusMessage;
use crate::net::api::use_api;
use crate::state::session::use_session;

/// Local check run before an enroll request is attempted.
pub(crate) fn enroll_precheck(session: Option<&Session>) -> Result<(), &'static str> {
    if session.is_none() {
        return Err(messages::SIGN_IN_TO_ENROLL);
    }
    Ok(())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let courses = RwSignal::new(Vec::<Course>::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.courses().await {
            Ok(list) => courses.set(list),
            Err(e) => error.set(Some(e.user_message().to_owned())),
        }
    });

    let enroll = move |course: Course| {
        info.set(None);
        error.set(None);
        if let Err(message) = enroll_precheck(session.get_untracked().as_ref()) {
            error.set(Some(message.to_owned()));
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.enroll(course).await {
                Ok(()) => info.set(Some(messages::ENROLLED.to_owned())),
                Err(e) => error.set(Some(e.user_message().to_owned())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, course);
    };

    view! {
        <div class="home-page">
            <h1>"Courses"</h1>
            <StatusMessage error=error info=info/>
            <table class="course-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Course"</th>
                        <th>"Instructor"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        courses
                            .get()
                            .into_iter()
                            .map(|course| {
                                let id = course.id;
                                let name = course.name.clone();
                                let instructor = course.instructor_name().to_owned();
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{name}</td>
                                        <td>{instructor}</td>
                                        <td>
                                            <button
                                                class="button button--primary"
                                                on:click=move |_| enroll(course.clone())
                                            >
                                                "Enroll"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
