//! Manager page: every enrollment record.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use access::CourseStudent;
use leptos::prelude::*;

use crate::components::status_message::StatusMessage;
use crate::net::api::use_api;

/// Display row: (student, course, instructor).
pub(crate) fn enrollment_row(record: &CourseStudent) -> (String, String, String) {
    let student = record.student.name.clone().unwrap_or_else(|| record.student.username.clone());
    (student, record.course.name.clone(), record.course.instructor_name().to_owned())
}

#[component]
pub fn ManagerPage() -> impl IntoView {
    let api = use_api();
    let enrollments = RwSignal::new(Vec::<CourseStudent>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.enrollments().await {
            Ok(list) => enrollments.set(list),
            Err(e) => error.set(Some(e.user_message().to_owned())),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <div class="manager-page">
            <h1>"Enrollments"</h1>
            <StatusMessage error=error/>
            <table class="course-table">
                <thead>
                    <tr>
                        <th>"Student"</th>
                        <th>"Course"</th>
                        <th>"Instructor"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        enrollments
                            .get()
                            .iter()
                            .map(|record| {
                                let (student, course, instructor) = enrollment_row(record);
                                view! {
                                    <tr>
                                        <td>{student}</td>
                                        <td>{course}</td>
                                        <td>{instructor}</td>
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
