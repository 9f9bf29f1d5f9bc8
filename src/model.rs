use serde::{Deserialize, Serialize};

pub const IMPORTANCE_MIN: f32 = 2.0;
pub const IMPORTANCE_MAX: f32 = 10.0;

/// Thematic bucket a thought belongs to. Links never cross categories and
/// the grouped layout anchors each bucket at its own region of space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Tech,
    Philosophy,
    Life,
    Art,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Philosophy,
        Category::Life,
        Category::Art,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TECH" => Some(Category::Tech),
            "PHILOSOPHY" => Some(Category::Philosophy),
            "LIFE" => Some(Category::Life),
            "ART" => Some(Category::Art),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tech => "TECH",
            Category::Philosophy => "PHILOSOPHY",
            Category::Life => "LIFE",
            Category::Art => "ART",
        }
    }
}

/// Which arrangement strategy positions the visible nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Spiral,
    Sphere,
    Force,
    Grouped,
}

impl LayoutMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SPIRAL" => Some(LayoutMode::Spiral),
            "SPHERE" => Some(LayoutMode::Sphere),
            "FORCE" => Some(LayoutMode::Force),
            "GROUPED" => Some(LayoutMode::Grouped),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Spiral => "SPIRAL",
            LayoutMode::Sphere => "SPHERE",
            LayoutMode::Force => "FORCE",
            LayoutMode::Grouped => "GROUPED",
        }
    }

    /// Constellation lines are rendered only in the simulated modes; the
    /// geometric arrangements would just show clutter.
    pub fn shows_links(self) -> bool {
        matches!(self, LayoutMode::Force | LayoutMode::Grouped)
    }
}

/// One thought in the galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtNode {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub content: String,
    /// ISO `YYYY-MM-DD`. Kept as a string; only the year is ever interpreted.
    pub date: String,
    pub importance: f32,
}

impl ThoughtNode {
    /// Importance clamped to the valid range. NaN and negative values fall
    /// back to the minimum instead of poisoning radius math downstream.
    pub fn clamped_importance(&self) -> f32 {
        if !self.importance.is_finite() || self.importance < 0.0 {
            return IMPORTANCE_MIN;
        }
        self.importance.clamp(IMPORTANCE_MIN, IMPORTANCE_MAX)
    }

    pub fn year(&self) -> Option<i32> {
        self.date.split('-').next()?.parse().ok()
    }
}

/// Undirected edge between two thoughts of the same category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkData {
    pub source: String,
    pub target: String,
    pub strength: f32,
}
