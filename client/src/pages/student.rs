//! Student pages: enrolled course list and single course detail.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use access::routes::STUDENT_PATH;
use access::{Course, messages};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::status_message::StatusMessage;
use crate::net::api::{ApiClient, use_api};

/// Parse the `:id` route segment.
pub(crate) fn parse_course_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}

pub(crate) fn find_course(courses: &[Course], id: i64) -> Option<&Course> {
    courses.iter().find(|c| c.id == id)
}

pub(crate) fn course_href(id: i64) -> String {
    format!("{STUDENT_PATH}/{id}")
}

fn load_my_courses(api: ApiClient, courses: RwSignal<Option<Vec<Course>>>, error: RwSignal<Option<String>>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.my_courses().await {
            Ok(list) => courses.set(Some(list)),
            Err(e) => error.set(Some(e.user_message().to_owned())),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (api, courses, error);
}

#[component]
pub fn StudentCoursesPage() -> impl IntoView {
    let api = use_api();
    let courses = RwSignal::new(None::<Vec<Course>>);
    let error = RwSignal::new(None::<String>);
    load_my_courses(api, courses, error);

    view! {
        <div class="student-page">
            <h1>"My Courses"</h1>
            <StatusMessage error=error/>
            <ul class="course-list">
                {move || {
                    courses
                        .get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|course| {
                            let href = course_href(course.id);
                            let name = course.name.clone();
                            let instructor = course.instructor_name().to_owned();
                            view! {
                                <li class="course-list__item">
                                    <A href=href>{name}</A>
                                    <span class="course-list__instructor">
                                        {instructor}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn StudentCoursePage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let courses = RwSignal::new(None::<Vec<Course>>);
    let error = RwSignal::new(None::<String>);
    load_my_courses(api, courses, error);

    let course_id = move || params.with(|p| parse_course_id(p.get("id").as_deref()));

    view! {
        <div class="student-page">
            <StatusMessage error=error/>
            {move || {
                let loaded = courses.get()?;
                let found = course_id().and_then(|id| find_course(&loaded, id).cloned());
                Some(match found {
                    Some(course) => {
                        view! {
                            <div class="course-detail">
                                <h1>{course.name.clone()}</h1>
                                <p>"Course #" {course.id}</p>
                                <p>"Instructor: " {course.instructor_name().to_owned()}</p>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <p class="status status--error">{messages::COURSE_NOT_FOUND}</p> }.into_any(),
                })
            }}
            <A href=STUDENT_PATH>"Back to my courses"</A>
        </div>
    }
}
