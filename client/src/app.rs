//! Root application component with routing and context providers.

use access::Page;
use access::routes::{HOME_PATH, NOT_FOUND_PATH};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::pages::{
    errors::{NotFoundPage, UnauthorizedPage},
    home::HomePage,
    login::LoginPage,
    manager::ManagerPage,
    profile::ProfilePage,
    register::RegisterPage,
    student::{StudentCoursePage, StudentCoursesPage},
    teacher::TeacherPage,
};
use crate::state::session::SessionProvider;
use crate::util::guard::Guarded;

/// Root application component.
///
/// Loads the persisted session once, provides it and the API client as
/// context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionProvider::load();
    provide_context(session);
    provide_context(ApiClient::new(session));

    view! {
        <Title text="Private School"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <Redirect path=NOT_FOUND_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("404") view=NotFoundPage/>
                    <Route path=StaticSegment("401") view=UnauthorizedPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded page=Page::Profile><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("student")
                        view=|| view! { <Guarded page=Page::StudentCourses><StudentCoursesPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("student"), ParamSegment("id"))
                        view=|| view! { <Guarded page=Page::StudentCourse><StudentCoursePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("teacher")
                        view=|| view! { <Guarded page=Page::Teacher><TeacherPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("manager")
                        view=|| view! { <Guarded page=Page::Manager><ManagerPage/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
