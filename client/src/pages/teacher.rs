//! Teacher page: students enrolled in the teacher's courses.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use access::User;
use leptos::prelude::*;

use crate::components::status_message::StatusMessage;
use crate::net::api::use_api;

/// Students sorted case-insensitively by display name, duplicates removed.
pub(crate) fn roster(mut students: Vec<User>) -> Vec<User> {
    students.sort_by_cached_key(|s| (display(s).to_lowercase(), s.id));
    students.dedup_by_key(|s| s.id);
    students
}

fn display(user: &User) -> &str {
    user.name.as_deref().unwrap_or(&user.username)
}

#[component]
pub fn TeacherPage() -> impl IntoView {
    let api = use_api();
    let students = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.my_students().await {
            Ok(list) => students.set(roster(list)),
            Err(e) => error.set(Some(e.user_message().to_owned())),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <div class="teacher-page">
            <h1>"My Students"</h1>
            <StatusMessage error=error/>
            <table class="course-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Username"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        students
                            .get()
                            .into_iter()
                            .map(|s| {
                                let name = display(&s).to_owned();
                                view! {
                                    <tr>
                                        <td>{s.id}</td>
                                        <td>{name}</td>
                                        <td>{s.username}</td>
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
