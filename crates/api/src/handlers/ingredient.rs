//! Read-only handlers for a recipe's ingredients.

use axum::extract::State;
use recipes_core::commands::{IngredientCommand, RecipeCommand};
use recipes_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::IdPath;
use crate::state::AppState;
use crate::views::{self, View};

#[derive(Debug, Serialize)]
pub struct IngredientListModel {
    pub recipe: RecipeCommand,
}

#[derive(Debug, Serialize)]
pub struct IngredientModel {
    pub ingredient: IngredientCommand,
}

/// GET /recipe/{id}/ingredients
pub async fn list(
    State(state): State<AppState>,
    IdPath(recipe_id): IdPath<DbId>,
) -> AppResult<View<IngredientListModel>> {
    let recipe = state.recipe_service.find_command_by_id(recipe_id).await?;
    Ok(View::ok(views::INGREDIENT_LIST, IngredientListModel { recipe }))
}

/// GET /recipe/{id}/ingredient/{ingredient_id}/show
pub async fn show(
    State(state): State<AppState>,
    IdPath((recipe_id, id)): IdPath<(DbId, DbId)>,
) -> AppResult<View<IngredientModel>> {
    let ingredient = state
        .ingredient_service
        .find_by_recipe_id_and_ingredient_id(recipe_id, id)
        .await?;
    Ok(View::ok(views::INGREDIENT_SHOW, IngredientModel { ingredient }))
}
