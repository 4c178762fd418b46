//! Filter View Model
//!
//! Course filtering for the guest menu. Filtering borrows from the input and
//! never reorders it.

use serde::{Deserialize, Serialize};
use shared::models::{Course, MenuItem, UnknownCourse};
use std::fmt;
use std::str::FromStr;

/// Guest view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuFilter {
    #[default]
    All,
    Starters,
    Mains,
    Desserts,
}

impl MenuFilter {
    /// Filter buttons in display order
    pub const OPTIONS: [MenuFilter; 4] = [
        MenuFilter::All,
        MenuFilter::Starters,
        MenuFilter::Mains,
        MenuFilter::Desserts,
    ];

    /// Course this filter selects; `None` for [`MenuFilter::All`]
    pub const fn course(&self) -> Option<Course> {
        match self {
            MenuFilter::All => None,
            MenuFilter::Starters => Some(Course::Starters),
            MenuFilter::Mains => Some(Course::Mains),
            MenuFilter::Desserts => Some(Course::Desserts),
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        self.course().is_none_or(|course| item.course == course)
    }

    pub const fn label(&self) -> &'static str {
        match self.course() {
            Some(course) => course.label(),
            None => "All",
        }
    }
}

impl From<Course> for MenuFilter {
    fn from(course: Course) -> Self {
        match course {
            Course::Starters => MenuFilter::Starters,
            Course::Mains => MenuFilter::Mains,
            Course::Desserts => MenuFilter::Desserts,
        }
    }
}

impl fmt::Display for MenuFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuFilter {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(MenuFilter::All);
        }
        s.parse::<Course>().map(MenuFilter::from)
    }
}

/// Items matching `filter`, in their original relative order.
///
/// [`MenuFilter::All`] yields every item. An empty result is a valid answer.
pub fn apply_filter(items: &[MenuItem], filter: MenuFilter) -> Vec<&MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
