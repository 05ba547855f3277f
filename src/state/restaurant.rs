//! Restaurant selection shared between the listing and review pages.
//!
//! DESIGN
//! ======
//! Holding the selection in context lets the review page show the chosen
//! restaurant without threading it through route params.

#[cfg(test)]
#[path = "restaurant_test.rs"]
mod restaurant_test;

use crate::net::types::Restaurant;

/// Currently selected restaurant, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestaurantState {
    pub current_restaurant: Option<Restaurant>,
}

impl RestaurantState {
    /// Select the restaurant to be reviewed.
    pub fn set_current_restaurant(&mut self, restaurant: Restaurant) {
        self.current_restaurant = Some(restaurant);
    }

    pub fn clear_current_restaurant(&mut self) {
        self.current_restaurant = None;
    }

    pub fn restaurant(&self) -> Option<&Restaurant> {
        self.current_restaurant.as_ref()
    }
}
