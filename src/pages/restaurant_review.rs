//! Review page for `/restaurants/:id/write-review`.

#[cfg(test)]
#[path = "restaurant_review_test.rs"]
mod restaurant_review_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Restaurant;
use crate::pages::restaurants::restaurant_label;
use crate::state::auth::Session;
use crate::state::restaurant::RestaurantState;

/// Heading for the review form. Uses the stored selection only when it is
/// the restaurant named in the URL.
fn review_heading(selected: Option<&Restaurant>, route_id: &str) -> String {
    match selected {
        Some(r) if r.id.to_string() == route_id => format!("Review {}", restaurant_label(r)),
        _ => format!("Review restaurant {route_id}"),
    }
}

#[component]
pub fn RestaurantReviewPage() -> impl IntoView {
    let params = use_params_map();
    let selection = expect_context::<RwSignal<RestaurantState>>();
    let auth = expect_context::<Session>().state();

    let route_id = move || params.with(|p| p.get(crate::routes::RESTAURANT_ID_PARAM)).unwrap_or_default();
    let heading = move || review_heading(selection.get().restaurant(), &route_id());
    let on_back = move |_| selection.update(RestaurantState::clear_current_restaurant);

    view! {
        <div class="review-page">
            <h1>{heading}</h1>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <p class="review-signin">
                            "Sign in to write a review. " <a href=crate::routes::HOME_PATH>"Sign in"</a>
                        </p>
                    }
                }
            >
                <p class="review-note">"Share what you ate and how it was."</p>
            </Show>
            <a href=crate::routes::RESTAURANTS_PATH class="review-back" on:click=on_back>
                "Choose another restaurant"
            </a>
        </div>
    }
}
