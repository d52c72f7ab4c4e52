//! Row types for the recipe tables and their assembly into domain entities.

use recipes_core::domain::{Category, Difficulty, Ingredient, Notes, Recipe, UnitOfMeasure};
use recipes_core::types::DbId;
use sqlx::FromRow;

/// A row from the `recipe` table, without its relations.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: DbId,
    pub description: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub directions: String,
    /// Upper-snake difficulty name, constrained by a CHECK in the schema.
    pub difficulty: String,
    pub image: Option<Vec<u8>>,
}

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NotesRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub recipe_notes: String,
}

/// An `ingredient` row left-joined with its `unit_of_measure`.
#[derive(Debug, Clone, FromRow)]
pub struct IngredientRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub description: String,
    pub amount: Option<f64>,
    pub uom_id: Option<DbId>,
    pub uom_description: Option<String>,
}

/// A `category` row joined through `recipe_category`.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeCategoryRow {
    pub recipe_id: DbId,
    pub id: DbId,
    pub description: String,
}

impl RecipeRow {
    /// Build the entity from this row plus the relation rows that belong to it.
    ///
    /// Relation rows for other recipes are ignored, so callers may pass the
    /// rows of a bulk load unfiltered.
    pub fn into_recipe(
        self,
        notes: &[NotesRow],
        ingredients: &[IngredientRow],
        categories: &[RecipeCategoryRow],
    ) -> Result<Recipe, sqlx::Error> {
        let difficulty: Difficulty = self
            .difficulty
            .parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let notes = notes
            .iter()
            .find(|n| n.recipe_id == self.id)
            .map(|n| Notes {
                id: Some(n.id),
                recipe_notes: n.recipe_notes.clone(),
            });

        let ingredients = ingredients
            .iter()
            .filter(|i| i.recipe_id == self.id)
            .map(IngredientRow::to_ingredient)
            .collect();

        let categories = categories
            .iter()
            .filter(|c| c.recipe_id == self.id)
            .map(|c| Category {
                id: Some(c.id),
                description: c.description.clone(),
            })
            .collect();

        Ok(Recipe {
            id: Some(self.id),
            description: self.description,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            source: self.source,
            url: self.url,
            directions: self.directions,
            difficulty,
            image: self.image,
            notes,
            ingredients,
            categories,
        })
    }
}

impl IngredientRow {
    pub fn to_ingredient(&self) -> Ingredient {
        let uom = self.uom_id.map(|id| UnitOfMeasure {
            id: Some(id),
            description: self.uom_description.clone().unwrap_or_default(),
        });

        Ingredient {
            id: Some(self.id),
            description: self.description.clone(),
            amount: self.amount,
            uom,
            recipe_id: Some(self.recipe_id),
        }
    }
}
