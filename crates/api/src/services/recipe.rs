use std::sync::Arc;

use async_trait::async_trait;
use recipes_core::commands::RecipeCommand;
use recipes_core::converters::{Converter, RecipeCommandToRecipe, RecipeToRecipeCommand};
use recipes_core::domain::Recipe;
use recipes_core::error::CoreError;
use recipes_core::types::DbId;
use recipes_db::repositories::RecipeRepository;

use crate::error::{AppError, AppResult};

#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Every stored recipe, in no particular order.
    async fn get_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Fails with [`CoreError::NotFound`] when no recipe has `id`.
    async fn find_by_id(&self, id: DbId) -> AppResult<Recipe>;

    async fn find_command_by_id(&self, id: DbId) -> AppResult<RecipeCommand>;

    /// Persist the command and return it as stored, generated ids included.
    async fn save_recipe_command(&self, command: RecipeCommand) -> AppResult<RecipeCommand>;

    /// Unknown ids are ignored.
    async fn delete_by_id(&self, id: DbId) -> AppResult<()>;
}

pub struct RecipeServiceImpl {
    repository: Arc<dyn RecipeRepository>,
    recipe_command_to_recipe: RecipeCommandToRecipe,
    recipe_to_recipe_command: RecipeToRecipeCommand,
}

impl RecipeServiceImpl {
    pub fn new(
        repository: Arc<dyn RecipeRepository>,
        recipe_command_to_recipe: RecipeCommandToRecipe,
        recipe_to_recipe_command: RecipeToRecipeCommand,
    ) -> Self {
        Self {
            repository,
            recipe_command_to_recipe,
            recipe_to_recipe_command,
        }
    }

    /// Service wired with the default converter graph.
    pub fn with_repository(repository: Arc<dyn RecipeRepository>) -> Self {
        Self::new(
            repository,
            RecipeCommandToRecipe::default(),
            RecipeToRecipeCommand::default(),
        )
    }
}

#[async_trait]
impl RecipeService for RecipeServiceImpl {
    async fn get_recipes(&self) -> AppResult<Vec<Recipe>> {
        tracing::debug!("Loading all recipes");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: DbId) -> AppResult<Recipe> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Recipe",
                id,
            }))
    }

    async fn find_command_by_id(&self, id: DbId) -> AppResult<RecipeCommand> {
        let recipe = self.find_by_id(id).await?;
        Ok(self.recipe_to_recipe_command.convert(&recipe))
    }

    async fn save_recipe_command(&self, command: RecipeCommand) -> AppResult<RecipeCommand> {
        let detached = self.recipe_command_to_recipe.convert(&command);
        let saved = self.repository.save(detached).await?;
        tracing::info!(recipe_id = ?saved.id, "Saved recipe");
        Ok(self.recipe_to_recipe_command.convert(&saved))
    }

    async fn delete_by_id(&self, id: DbId) -> AppResult<()> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(recipe_id = id, "Deleted recipe");
        Ok(())
    }
}
