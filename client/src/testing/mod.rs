//! Test utilities: record factories and an SSR render harness.
//!
//! `render_with_providers` mirrors what `App` provides (router, theme and
//! toast contexts) so components that read context can be rendered in
//! isolation and asserted on as HTML.

pub mod mock;

#[cfg(feature = "ssr")]
use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::state::{
    theme::{Theme, ThemeContext},
    toasts::ToastContext,
};

/// Render `view` inside a `Router` at `path` with fresh theme and toast
/// contexts, returning the resulting HTML.
#[cfg(feature = "ssr")]
pub fn render_with_providers<F, V>(path: &str, view: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    use leptos::tachys::view::RenderHtml;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(ThemeContext::new(Theme::Light));
        provide_context(ToastContext::default());
        view! { <Router>{view()}</Router> }.to_html()
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[component]
    fn ThemeProbe() -> impl IntoView {
        let theme = expect_context::<ThemeContext>();
        view! { <span data-theme=move || theme.current().as_str()></span> }
    }

    #[test]
    fn harness_provides_light_theme() {
        let html = render_with_providers("/", || view! { <ThemeProbe/> });
        assert!(html.contains("data-theme=\"light\""));
    }
}
