//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast::ToastHost;
use crate::pages::{
    assignments::AssignmentsPage,
    courses::{CourseDetailPage, CoursesPage},
    dashboard::DashboardPage,
    login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::{theme::ThemeContext, toasts::ToastContext};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-slate-50 text-slate-900 dark:bg-slate-950 dark:text-slate-100">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ThemeContext::from_preference());
    provide_context(ToastContext::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/campus.css"/>
        <Title text="Campus"/>

        <Router>
            <NavBar/>
            <main class="mx-auto max-w-6xl px-4 py-8">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailPage/>
                    <Route path=StaticSegment("assignments") view=AssignmentsPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
