//! Static route table for the application.
//!
//! `App` registers one `leptos_router` route per entry, built from the
//! segment constants below, and asks [`loads_lazily`] whether to defer the
//! page. Matching and precedence are left to the router. The table is the
//! single list of paths the rest of the crate links against.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// How a page is loaded on navigation.
///
/// Lazy pages render a placeholder until the client has hydrated, so the
/// server only ships markup for the eager landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingMode {
    Eager,
    Lazy,
}

/// Route-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Profile,
    Restaurants,
    RestaurantReview,
    Contact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub loading: LoadingMode,
}

pub const HOME_SEGMENT: &str = "";
pub const PROFILE_SEGMENT: &str = "profile";
pub const RESTAURANTS_SEGMENT: &str = "restaurants";
pub const RESTAURANT_ID_PARAM: &str = "id";
pub const WRITE_REVIEW_SEGMENT: &str = "write-review";
pub const CONTACT_SEGMENT: &str = "contact";

pub const HOME_PATH: &str = "/";
pub const PROFILE_PATH: &str = "/profile";
pub const RESTAURANTS_PATH: &str = "/restaurants";
pub const WRITE_REVIEW_PATH: &str = "/restaurants/:id/write-review";
pub const CONTACT_PATH: &str = "/contact";

pub const ROUTES: [RouteEntry; 5] = [
    RouteEntry { path: HOME_PATH, page: Page::Home, loading: LoadingMode::Eager },
    RouteEntry { path: PROFILE_PATH, page: Page::Profile, loading: LoadingMode::Lazy },
    RouteEntry { path: RESTAURANTS_PATH, page: Page::Restaurants, loading: LoadingMode::Lazy },
    RouteEntry { path: WRITE_REVIEW_PATH, page: Page::RestaurantReview, loading: LoadingMode::Lazy },
    RouteEntry { path: CONTACT_PATH, page: Page::Contact, loading: LoadingMode::Lazy },
];

/// Table entry for `page`.
pub fn entry(page: Page) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|r| r.page == page)
}

/// Whether `page` renders behind the hydration placeholder.
pub fn loads_lazily(page: Page) -> bool {
    entry(page).is_some_and(|r| r.loading == LoadingMode::Lazy)
}

/// Concrete path of the review form for one restaurant.
pub fn write_review_path(restaurant_id: &str) -> String {
    WRITE_REVIEW_PATH.replace(":id", restaurant_id)
}
