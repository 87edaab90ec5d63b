//! Video category definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content category chosen in the first wizard step.
///
/// The category steers both script enhancement and clip selection on the
/// backend, which receives it as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tech,
    Education,
    Fitness,
    Food,
    Marketing,
    Travel,
    Gaming,
    Lifestyle,
    /// Categories introduced server-side that this client does not know yet.
    #[serde(other)]
    Other,
}

impl Category {
    /// All categories selectable in the wizard.
    pub const ALL: &'static [Category] = &[
        Category::Tech,
        Category::Education,
        Category::Fitness,
        Category::Food,
        Category::Marketing,
        Category::Travel,
        Category::Gaming,
        Category::Lifestyle,
    ];

    /// Returns the category as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Education => "education",
            Category::Fitness => "fitness",
            Category::Food => "food",
            Category::Marketing => "marketing",
            Category::Travel => "travel",
            Category::Gaming => "gaming",
            Category::Lifestyle => "lifestyle",
            Category::Other => "other",
        }
    }

    /// Human-readable name used in generated titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tech => "Tecnología",
            Category::Education => "Educación",
            Category::Fitness => "Fitness",
            Category::Food => "Comida",
            Category::Marketing => "Marketing",
            Category::Travel => "Viajes",
            Category::Gaming => "Gaming",
            Category::Lifestyle => "Estilo de vida",
            Category::Other => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tech" => Ok(Category::Tech),
            "education" => Ok(Category::Education),
            "fitness" => Ok(Category::Fitness),
            "food" => Ok(Category::Food),
            "marketing" => Ok(Category::Marketing),
            "travel" => Ok(Category::Travel),
            "gaming" => Ok(Category::Gaming),
            "lifestyle" => Ok(Category::Lifestyle),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryParseError(String);
