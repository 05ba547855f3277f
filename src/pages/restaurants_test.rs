use super::*;

#[test]
fn restaurant_label_prefers_name() {
    let restaurant = Restaurant::new(1).with_field("name", "Casa Lola");
    assert_eq!(restaurant_label(&restaurant), "Casa Lola");
}

#[test]
fn restaurant_label_falls_back_to_id() {
    assert_eq!(restaurant_label(&Restaurant::new("r-7")), "Restaurant r-7");
}
