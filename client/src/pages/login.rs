//! Sign-in / registration page.
//!
//! Submissions are only logged and acknowledged with a toast; there is no
//! account backend behind this page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;
use crate::components::card::Card;
use crate::components::login_form::LoginDetails;
use crate::components::register_form::RegistrationDetails;
use crate::state::toasts::{Toast, ToastContext};

pub fn login_message(details: &LoginDetails) -> String {
    format!("Signing in as {}", details.email)
}

/// Confirmation text, or a warning when the two password fields differ.
pub fn registration_message(details: &RegistrationDetails) -> Result<String, String> {
    if details.password != details.confirm_password {
        return Err("Passwords do not match".to_owned());
    }
    Ok(format!("Account requested for {} ({})", details.name, details.role.label()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();

    let on_login = Callback::new(move |details: LoginDetails| {
        leptos::logging::log!("login submitted: {}", serde_json::to_string(&details).unwrap_or_default());
        toasts.notify(Toast::info(login_message(&details)));
    });

    let on_register = Callback::new(move |details: RegistrationDetails| {
        leptos::logging::log!("registration submitted: {}", serde_json::to_string(&details).unwrap_or_default());
        let toast = match registration_message(&details) {
            Ok(message) => Toast::info(message),
            Err(message) => Toast::warning(message),
        };
        toasts.notify(toast);
    });

    view! {
        <section class="flex justify-center py-12">
            <Card variant="elevated" padding="lg" class="w-full max-w-md">
                <h1 class="mb-6 text-center text-2xl font-bold text-slate-900 dark:text-slate-100">"Welcome to Campus"</h1>
                <AuthPanel on_login=on_login on_register=on_register/>
            </Card>
        </section>
    }
}
