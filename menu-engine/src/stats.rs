//! Statistics Deriver
//!
//! Per-course item counts and average prices, recomputed from whatever
//! collection is handed in. Sums stay unrounded; only the final average is
//! rounded to cents (half away from zero).

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{Course, MenuItem};

/// Rounding for displayed averages (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Count and average price of one course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub count: usize,
    /// Exactly two decimal places; `0.00` when `count == 0`
    #[serde(with = "rust_decimal::serde::str")]
    pub average_price: Decimal,
}

impl Default for CourseStats {
    fn default() -> Self {
        Self {
            count: 0,
            average_price: Decimal::new(0, DECIMAL_PLACES),
        }
    }
}

/// Statistics for every course, serialized keyed by course label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuStats {
    pub starters: CourseStats,
    pub mains: CourseStats,
    pub desserts: CourseStats,
}

impl MenuStats {
    pub fn get(&self, course: Course) -> &CourseStats {
        match course {
            Course::Starters => &self.starters,
            Course::Mains => &self.mains,
            Course::Desserts => &self.desserts,
        }
    }

    /// `(course, stats)` pairs in menu order
    pub fn iter(&self) -> impl Iterator<Item = (Course, &CourseStats)> {
        Course::ALL
            .into_iter()
            .map(move |course| (course, self.get(course)))
    }

    pub fn total_items(&self) -> usize {
        self.iter().map(|(_, s)| s.count).sum()
    }
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    sum: Decimal,
}

impl Accumulator {
    fn push(&mut self, price: Decimal) {
        self.count += 1;
        self.sum = self.sum.saturating_add(price);
    }

    fn finish(self) -> CourseStats {
        if self.count == 0 {
            return CourseStats::default();
        }
        let mut average = (self.sum / Decimal::from(self.count))
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        average.rescale(DECIMAL_PLACES);
        CourseStats {
            count: self.count,
            average_price: average,
        }
    }
}

/// Derive per-course statistics from `items`
pub fn derive_stats<'a, I>(items: I) -> MenuStats
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut starters = Accumulator::default();
    let mut mains = Accumulator::default();
    let mut desserts = Accumulator::default();

    for item in items {
        match item.course {
            Course::Starters => starters.push(item.price),
            Course::Mains => mains.push(item.price),
            Course::Desserts => desserts.push(item.price),
        }
    }

    MenuStats {
        starters: starters.finish(),
        mains: mains.finish(),
        desserts: desserts.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::seed_menu;

    fn item(id: &str, price: &str, course: Course) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Dish {id}"),
            description: "desc".to_string(),
            price: Decimal::from_str(price).unwrap(),
            course,
        }
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<MenuItem> = Vec::new();
        let stats = derive_stats(&items);
        for (_, s) in stats.iter() {
            assert_eq!(s.count, 0);
            assert_eq!(s.average_price.to_string(), "0.00");
        }
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({
                "Starters": {"count": 0, "averagePrice": "0.00"},
                "Mains": {"count": 0, "averagePrice": "0.00"},
                "Desserts": {"count": 0, "averagePrice": "0.00"},
            })
        );
    }

    #[test]
    fn test_average_of_two_mains() {
        let items = [
            item("a", "10.00", Course::Mains),
            item("b", "15.00", Course::Mains),
        ];
        let stats = derive_stats(&items);
        assert_eq!(stats.mains.count, 2);
        assert_eq!(stats.mains.average_price.to_string(), "12.50");
        assert_eq!(stats.starters.count, 0);
        assert_eq!(stats.total_items(), 2);
    }

    #[test]
    fn test_average_rounds_once_at_the_end() {
        // 1.005 + 1.005 + 1.00 = 3.01 / 3 = 1.00333...
        let items = [
            item("a", "1.005", Course::Desserts),
            item("b", "1.005", Course::Desserts),
            item("c", "1.00", Course::Desserts),
        ];
        assert_eq!(
            derive_stats(&items).desserts.average_price.to_string(),
            "1.00"
        );

        let items = [
            item("a", "0.01", Course::Starters),
            item("b", "0.02", Course::Starters),
        ];
        assert_eq!(
            derive_stats(&items).starters.average_price.to_string(),
            "0.02"
        );
    }

    #[test]
    fn test_average_at_price_limit() {
        let items = [
            item("a", "1000000.00", Course::Mains),
            item("b", "999999.98", Course::Mains),
            item("c", "999999.99", Course::Mains),
        ];
        let stats = derive_stats(&items);
        assert_eq!(stats.mains.count, 3);
        assert_eq!(stats.mains.average_price.to_string(), "999999.99");

        let items = [
            item("a", "1000000.00", Course::Desserts),
            item("b", "1000000.00", Course::Desserts),
        ];
        assert_eq!(
            derive_stats(&items).desserts.average_price.to_string(),
            "1000000.00"
        );
    }

    #[test]
    fn test_order_independent() {
        let mut items = seed_menu();
        items.push(item("x", "9.99", Course::Starters));
        let forward = derive_stats(&items);
        items.reverse();
        assert_eq!(derive_stats(&items), forward);
    }

    #[test]
    fn test_seed_menu_stats() {
        let stats = derive_stats(&seed_menu());
        assert_eq!(stats.get(Course::Starters).average_price.to_string(), "8.50");
        assert_eq!(stats.get(Course::Mains).average_price.to_string(), "15.00");
        assert_eq!(stats.get(Course::Desserts).average_price.to_string(), "7.00");
        assert_eq!(stats.total_items(), 3);
    }

    #[test]
    fn test_accepts_borrowed_subsets() {
        let items = seed_menu();
        let mains: Vec<&MenuItem> = items.iter().filter(|i| i.course == Course::Mains).collect();
        let stats = derive_stats(mains);
        assert_eq!(stats.mains.count, 1);
        assert_eq!(stats.starters.count, 0);
    }
}
