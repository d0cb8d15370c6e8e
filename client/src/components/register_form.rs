//! Account registration form shell.

use leptos::prelude::*;
use serde::Serialize;

use crate::components::button::Button;
use crate::components::input::Input;
use crate::state::records::Role;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub role: Role,
}

#[component]
pub fn RegisterForm(on_submit: Callback<RegistrationDetails>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(RegistrationDetails {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            confirm_password: confirm.get(),
            role: role.get(),
        });
    };

    view! {
        <form class="space-y-4" on:submit=submit>
            <Input
                label="Full name"
                name="name"
                autocomplete="name"
                required=true
                value=name
                on_input=Callback::new(move |v| name.set(v))
            />
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
                autocomplete="new-password"
                required=true
                value=password
                on_input=Callback::new(move |v| password.set(v))
            />
            <Input
                label="Confirm password"
                name="confirm password"
                input_type="password"
                autocomplete="new-password"
                required=true
                value=confirm
                on_input=Callback::new(move |v| confirm.set(v))
            />
            <div class="space-y-1">
                <label for="field-role" class="block text-sm font-medium text-slate-700 dark:text-slate-300">
                    "I am a"
                </label>
                <select
                    id="field-role"
                    name="role"
                    class="block h-10 w-full rounded-md border border-slate-300 bg-white px-3 text-sm dark:bg-slate-900"
                    prop:value=move || role.get().as_str()
                    on:change=move |ev| role.set(Role::parse_or_default(&event_target_value(&ev)))
                >
                    {Role::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Button button_type="submit" full_width=true>"Create account"</Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_details_serialize_without_secrets() {
        let details = RegistrationDetails {
            name: "Ada".to_owned(),
            email: "ada@school.edu".to_owned(),
            password: "pw".to_owned(),
            confirm_password: "pw".to_owned(),
            role: Role::Instructor,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ada", "email": "ada@school.edu", "role": "instructor" })
        );
    }
}
