use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Ingredient, Notes};
use crate::types::DbId;

/// How hard a recipe is to prepare.
///
/// Stored in the database as the upper-snake name (`KIND_OF_HARD`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Moderate,
    KindOfHard,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::KindOfHard,
        Difficulty::Hard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Moderate => "MODERATE",
            Difficulty::KindOfHard => "KIND_OF_HARD",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}'")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// A recipe together with its notes, ingredients and categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<DbId>,
    pub description: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub directions: String,
    pub difficulty: Difficulty,
    /// Raw image bytes. Never bound from forms.
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    pub notes: Option<Notes>,
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<Category>,
}

impl Recipe {
    /// Find one of this recipe's ingredients by id.
    pub fn ingredient(&self, id: DbId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == Some(id))
    }
}
