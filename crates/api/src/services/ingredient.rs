use std::sync::Arc;

use async_trait::async_trait;
use recipes_core::commands::IngredientCommand;
use recipes_core::converters::{Converter, IngredientToIngredientCommand};
use recipes_core::error::CoreError;
use recipes_core::types::DbId;
use recipes_db::repositories::RecipeRepository;

use crate::error::{AppError, AppResult};

#[async_trait]
pub trait IngredientService: Send + Sync {
    /// Fails with [`CoreError::NotFound`] when either the recipe or the
    /// ingredient within it is missing.
    async fn find_by_recipe_id_and_ingredient_id(
        &self,
        recipe_id: DbId,
        ingredient_id: DbId,
    ) -> AppResult<IngredientCommand>;
}

pub struct IngredientServiceImpl {
    repository: Arc<dyn RecipeRepository>,
    ingredient_to_ingredient_command: IngredientToIngredientCommand,
}

impl IngredientServiceImpl {
    pub fn new(
        repository: Arc<dyn RecipeRepository>,
        ingredient_to_ingredient_command: IngredientToIngredientCommand,
    ) -> Self {
        Self {
            repository,
            ingredient_to_ingredient_command,
        }
    }
}

#[async_trait]
impl IngredientService for IngredientServiceImpl {
    async fn find_by_recipe_id_and_ingredient_id(
        &self,
        recipe_id: DbId,
        ingredient_id: DbId,
    ) -> AppResult<IngredientCommand> {
        let recipe = self
            .repository
            .find_by_id(recipe_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Recipe",
                id: recipe_id,
            }))?;

        let ingredient = recipe.ingredient(ingredient_id).ok_or_else(|| {
            tracing::debug!(recipe_id, ingredient_id, "Ingredient not part of recipe");
            AppError::Core(CoreError::NotFound {
                entity: "Ingredient",
                id: ingredient_id,
            })
        })?;

        Ok(self.ingredient_to_ingredient_command.convert(ingredient))
    }
}
