use super::*;
use crate::state::records::Role;

fn registration(password: &str, confirm: &str) -> RegistrationDetails {
    RegistrationDetails {
        name: "Sam Patel".to_owned(),
        email: "sam@school.edu".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        role: Role::Instructor,
    }
}

#[test]
fn login_message_names_email() {
    let details = LoginDetails::collect("sam@school.edu", "pw", false);
    assert_eq!(login_message(&details), "Signing in as sam@school.edu");
}

#[test]
fn registration_message_includes_role_label() {
    let message = registration_message(&registration("pw", "pw")).unwrap();
    assert_eq!(message, format!("Account requested for Sam Patel ({})", Role::Instructor.label()));
}

#[test]
fn registration_message_rejects_mismatched_passwords() {
    assert_eq!(registration_message(&registration("pw", "pw2")), Err("Passwords do not match".to_owned()));
}

#[cfg(feature = "ssr")]
#[test]
fn login_page_starts_on_sign_in_tab() {
    let html = crate::testing::render_with_providers("/login", || view! { <LoginPage/> });
    assert!(html.contains("Remember me"));
    assert!(!html.contains("Confirm password"));
}
