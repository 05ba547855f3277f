//! Profile page for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;
use crate::state::auth::Session;
use crate::state::user::UserState;

/// Label/value rows shown for a user record: id, then name and email when present.
fn profile_rows(user: &UserRecord) -> Vec<(&'static str, String)> {
    let mut rows = vec![("ID", user.id.to_string())];
    if let Some(name) = user.name() {
        rows.push(("Name", name.to_owned()));
    }
    if let Some(email) = user.email() {
        rows.push(("Email", email.to_owned()));
    }
    rows
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<Session>().state();
    let users = expect_context::<RwSignal<UserState>>();

    // A profile picked elsewhere wins over the session user.
    let shown = move || users.get().user.or_else(|| auth.get().user_data);

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || match shown() {
                Some(user) => {
                    let rows = profile_rows(&user);
                    view! {
                        <dl class="profile-fields">
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                .collect_view()}
                        </dl>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <p class="profile-empty">
                            "You are not signed in. " <a href=crate::routes::HOME_PATH>"Sign in"</a>
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
