//! Sign-in form shell.
//!
//! Field values live in local signals. Submitting hands a `LoginDetails`
//! snapshot to the caller; nothing is sent anywhere from here.

use leptos::prelude::*;
use serde::Serialize;

use crate::components::button::Button;
use crate::components::input::Input;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginDetails {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub remember: bool,
}

impl LoginDetails {
    /// Snapshot of the current field values with the email trimmed.
    pub fn collect(email: &str, password: &str, remember: bool) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned(), remember }
    }
}

#[component]
pub fn LoginForm(on_submit: Callback<LoginDetails>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let details = email.with(|e| password.with(|p| LoginDetails::collect(e, p, remember.get())));
        on_submit.run(details);
    };

    view! {
        <form class="space-y-4" on:submit=submit>
            <Input
                label="Email"
                name="email"
                input_type="email"
                placeholder="you@school.edu"
                autocomplete="email"
                required=true
                value=email
                on_input=Callback::new(move |v| email.set(v))
            />
            <Input
                label="Password"
                name="password"
                input_type="password"
                autocomplete="current-password"
                required=true
                value=password
                on_input=Callback::new(move |v| password.set(v))
            />
            <label class="flex items-center gap-2 text-sm text-slate-600 dark:text-slate-300">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-slate-300"
                    prop:checked=move || remember.get()
                    on:change=move |ev| remember.set(event_target_checked(&ev))
                />
                "Remember me"
            </label>
            <Button button_type="submit" full_width=true>"Sign in"</Button>
        </form>
    }
}
