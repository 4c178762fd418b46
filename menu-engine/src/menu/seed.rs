//! Seed menu loaded at process start

use rust_decimal::Decimal;
use shared::models::{Course, MenuItem};

fn item(id: &str, name: &str, description: &str, cents: i64, course: Course) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        course,
    }
}

/// The menu the admin dashboard opens with
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        item(
            "1",
            "Bruschetta",
            "Grilled bread with tomatoes, garlic, and olive oil.",
            850,
            Course::Starters,
        ),
        item(
            "2",
            "Spaghetti Carbonara",
            "Pasta with eggs, cheese, pancetta, and pepper.",
            1500,
            Course::Mains,
        ),
        item(
            "3",
            "Tiramisu",
            "Coffee-flavoured Italian dessert.",
            700,
            Course::Desserts,
        ),
    ]
}
