//! Landing page with sign-in and account creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only eagerly loaded route. It drives the session store:
//! login and register go through `Session`, and a successful registration
//! also snapshots the new user for the profile flow.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::{Credentials, Registration};
use crate::state::auth::Session;
use crate::state::user::UserState;
use crate::util::validation::{FieldError, validate_mail, validate_password, validate_registration};

/// Trim and check the sign-in form.
fn login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if !validate_mail(email) {
        return Err("Enter a valid email address.");
    }
    if !validate_password(password) {
        return Err("Password must be at least 8 characters.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Trim and check the registration form.
fn registration_input(name: &str, email: &str, password: &str, repeat: &str) -> Result<Registration, Vec<FieldError>> {
    let registration =
        Registration { name: name.trim().to_owned(), email: email.trim().to_owned(), password: password.to_owned() };
    let errors = validate_registration(&registration, repeat);
    if errors.is_empty() { Ok(registration) } else { Err(errors) }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.message).collect::<Vec<_>>().join(" ")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let users = expect_context::<RwSignal<UserState>>();
    let auth = session.state();

    view! {
        <div class="home-page">
            <h1>"Restaurant Reviews"</h1>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || view! { <AuthForms/> }
            >
                <SignedIn session=session.clone() users=users/>
            </Show>
        </div>
    }
}

#[component]
fn SignedIn(session: Session, users: RwSignal<UserState>) -> impl IntoView {
    let auth = session.state();
    let greeting = move || {
        auth.get()
            .user()
            .and_then(|u| u.name().map(str::to_owned))
            .map_or_else(|| "Welcome back!".to_owned(), |name| format!("Welcome back, {name}!"))
    };
    let on_logout = move |_| {
        session.logout();
        users.update(UserState::logout);
    };

    view! {
        <section class="home-signed-in">
            <p>{greeting}</p>
            <a href=crate::routes::RESTAURANTS_PATH class="home-button">"Browse restaurants"</a>
            <button class="home-button" on:click=on_logout>"Log out"</button>
        </section>
    }
}

#[component]
fn AuthForms() -> impl IntoView {
    let session = expect_context::<Session>();
    let users = expect_context::<RwSignal<UserState>>();
    let auth = session.state();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_repeat = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let login_session = session.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        login_session.clear_errors();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = login_session.clone();
            leptos::task::spawn_local(async move {
                if let Ok(user) = session.login(credentials).await {
                    users.update(|u| u.set_user(user));
                    password.set(String::new());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, users);
            busy.set(false);
        }
    };

    let register_session = session.clone();
    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match registration_input(&reg_name.get(), &reg_email.get(), &reg_password.get(), &reg_repeat.get()) {
            Ok(registration) => registration,
            Err(errors) => {
                info.set(join_messages(&errors));
                return;
            }
        };
        info.set(String::new());
        register_session.clear_errors();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = register_session.clone();
            leptos::task::spawn_local(async move {
                if let Ok(user) = session.register(registration).await {
                    if let Err(e) = crate::util::persistence::store_user(session.storage(), &user) {
                        log::warn!("new user not persisted: {e}");
                    }
                    users.update(|u| u.set_user(user));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (registration, users);
            busy.set(false);
        }
    };

    let server_error = move || auth.get().errors().message.clone().unwrap_or_default();

    view! {
        <div class="auth-forms">
            <form class="auth-form" on:submit=on_login>
                <h2>"Sign in"</h2>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>"Sign in"</button>
            </form>
            <form class="auth-form" on:submit=on_register>
                <h2>"Create an account"</h2>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || reg_name.get()
                    on:input=move |ev| reg_name.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || reg_email.get()
                    on:input=move |ev| reg_email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password (8+ characters)"
                    prop:value=move || reg_password.get()
                    on:input=move |ev| reg_password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Repeat password"
                    prop:value=move || reg_repeat.get()
                    on:input=move |ev| reg_repeat.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>"Register"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <Show when=move || !server_error().is_empty()>
                <p class="auth-message auth-message--error">{server_error}</p>
            </Show>
        </div>
    }
}
