//! Restaurant listing with the entry point into the review flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picking a restaurant stores it in `RestaurantState` before navigating, so
//! the review page can show it without another request.

#[cfg(test)]
#[path = "restaurants_test.rs"]
mod restaurants_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Restaurant;
use crate::routes::write_review_path;
use crate::state::restaurant::RestaurantState;

/// Display name, falling back to the id when the API sent no name.
pub fn restaurant_label(restaurant: &Restaurant) -> String {
    restaurant
        .name()
        .map_or_else(|| format!("Restaurant {}", restaurant.id), str::to_owned)
}

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<RestaurantState>>();
    let items = RwSignal::new(Vec::<Restaurant>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ApiConfig>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_restaurants(&config).await {
                Ok(list) => items.set(list),
                Err(e) => error.set(Some(format!("Could not load restaurants: {e}"))),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let on_review = move |restaurant: Restaurant| {
        let path = write_review_path(&restaurant.id.to_string());
        selection.update(|s| s.set_current_restaurant(restaurant));
        navigate(&path, NavigateOptions::default());
    };

    view! {
        <div class="restaurants-page">
            <h1>"Restaurants"</h1>
            <Show when=move || loading.get()>
                <p class="restaurants-loading">"Loading restaurants..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="restaurants-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="restaurants-list">
                <For each=move || items.get() key=|r: &Restaurant| r.id.to_string() let:restaurant>
                    {
                        let on_review = on_review.clone();
                        let label = restaurant_label(&restaurant);
                        view! {
                            <li class="restaurants-item">
                                <span>{label}</span>
                                <button on:click=move |_| on_review(restaurant.clone())>"Write a review"</button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
