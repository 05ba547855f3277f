//! Static contact page.

use leptos::prelude::*;

pub const CONTACT_EMAIL: &str = "hello@restaurant-reviews.example";

#[component]
pub fn ContactPage() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <p>"Questions, corrections or a restaurant we are missing? Write to us."</p>
            <a class="contact-link" href=mailto>{CONTACT_EMAIL}</a>
        </div>
    }
}
