//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpAuthGateway;
use crate::pages::{
    contact::ContactPage, home::HomePage, profile::ProfilePage, restaurant_review::RestaurantReviewPage,
    restaurants::RestaurantsPage,
};
use crate::routes::{self, Page};
use crate::state::auth::Session;
use crate::state::restaurant::RestaurantState;
use crate::state::user::UserState;
use crate::util::storage::app_storage;

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
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the API config, falling back to the local default.
fn api_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default API base URL");
        ApiConfig::default()
    })
}

/// Root application component.
///
/// Builds the session once, restores it from storage after hydration, and
/// provides it alongside the selection stores to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = api_config();
    let session = Session::new(Arc::new(HttpAuthGateway::new(config.clone())), app_storage());
    let restaurant = RwSignal::new(RestaurantState::default());
    let user = RwSignal::new(UserState::default());

    // Effects only run in the browser, where the snapshot lives.
    let restore = session.clone();
    Effect::new(move || {
        let outcome = restore.check_local_storage();
        log::debug!("session restore: {outcome:?}");
    });

    provide_context(config);
    provide_context(session);
    provide_context(restaurant);
    provide_context(user);

    view! {
        <Stylesheet id="leptos" href="/pkg/resto-client.css"/>
        <Title text="Restaurant Reviews"/>

        <Router>
            <nav class="site-nav">
                <a href=routes::HOME_PATH>"Home"</a>
                <a href=routes::RESTAURANTS_PATH>"Restaurants"</a>
                <a href=routes::PROFILE_PATH>"Profile"</a>
                <a href=routes::CONTACT_PATH>"Contact"</a>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment(routes::HOME_SEGMENT) view=|| page_view(Page::Home)/>
                    <Route path=StaticSegment(routes::PROFILE_SEGMENT) view=|| page_view(Page::Profile)/>
                    <Route
                        path=StaticSegment(routes::RESTAURANTS_SEGMENT)
                        view=|| page_view(Page::Restaurants)
                    />
                    <Route
                        path=(
                            StaticSegment(routes::RESTAURANTS_SEGMENT),
                            ParamSegment(routes::RESTAURANT_ID_PARAM),
                            StaticSegment(routes::WRITE_REVIEW_SEGMENT),
                        )
                        view=|| page_view(Page::RestaurantReview)
                    />
                    <Route path=StaticSegment(routes::CONTACT_SEGMENT) view=|| page_view(Page::Contact)/>
                </Routes>
            </main>
        </Router>
    }
}

fn page_body(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        Page::Restaurants => view! { <RestaurantsPage/> }.into_any(),
        Page::RestaurantReview => view! { <RestaurantReviewPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
    }
}

/// Route view for `page`, deferred when the route table marks it lazy.
fn page_view(page: Page) -> AnyView {
    if routes::loads_lazily(page) {
        view! { <Deferred>{page_body(page)}</Deferred> }.into_any()
    } else {
        page_body(page)
    }
}

/// Wrapper for lazily loaded routes: renders a placeholder until the client
/// has hydrated, then mounts the page.
#[component]
fn Deferred(children: ChildrenFn) -> impl IntoView {
    let ready = RwSignal::new(false);
    Effect::new(move || ready.set(true));

    move || {
        if ready.get() {
            children().into_any()
        } else {
            view! { <p class="page-loading">"Loading..."</p> }.into_any()
        }
    }
}
