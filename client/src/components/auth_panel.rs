//! Sign-in / register tabs around the two form shells.

use leptos::prelude::*;

use crate::components::login_form::{LoginDetails, LoginForm};
use crate::components::register_form::{RegisterForm, RegistrationDetails};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub const ALL: [AuthTab; 2] = [Self::Login, Self::Register];

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }
}

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "flex-1 border-b-2 border-indigo-600 pb-2 text-sm font-semibold text-indigo-600"
    } else {
        "flex-1 border-b-2 border-transparent pb-2 text-sm font-medium text-slate-500 hover:text-slate-700"
    }
}

#[component]
pub fn AuthPanel(
    on_login: Callback<LoginDetails>,
    on_register: Callback<RegistrationDetails>,
    #[prop(optional)] initial: AuthTab,
) -> impl IntoView {
    let tab = RwSignal::new(initial);

    view! {
        <div class="w-full max-w-md space-y-6">
            <div class="flex" role="tablist">
                {AuthTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (tab.get() == t).to_string()
                                class=move || tab_class(tab.get() == t)
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || tab.get() == AuthTab::Login
                fallback=move || view! { <RegisterForm on_submit=on_register/> }
            >
                <LoginForm on_submit=on_login/>
            </Show>
        </div>
    }
}
