use axum::extract::State;
use recipes_core::domain::Recipe;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{self, View};

#[derive(Debug, Serialize)]
pub struct IndexModel {
    pub recipes: Vec<Recipe>,
}

/// GET /
pub async fn list(State(state): State<AppState>) -> AppResult<View<IndexModel>> {
    let recipes = state.recipe_service.get_recipes().await?;
    Ok(View::ok(views::INDEX, IndexModel { recipes }))
}
