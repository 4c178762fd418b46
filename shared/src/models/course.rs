//! Course Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed menu course. Every item belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Desserts,
}

impl Course {
    /// All courses in menu order
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    pub const fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name one of the fixed courses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course: {0:?}")]
pub struct UnknownCourse(pub String);

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCourse(trimmed.to_string()))
    }
}
