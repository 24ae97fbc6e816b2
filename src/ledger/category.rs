use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of expense purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Fun,
    School,
    Other,
}

impl Category {
    /// Every category in menu and report order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Fun,
        Category::School,
        Category::Other,
    ];

    /// Maps a zero-based menu selection onto a category.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Category::Food => 0,
            Category::Transport => 1,
            Category::Fun => 2,
            Category::School => 3,
            Category::Other => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Fun => "Fun",
            Category::School => "School",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
