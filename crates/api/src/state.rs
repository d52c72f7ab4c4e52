use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{IngredientService, RecipeService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only; data goes through services).
    pub pool: recipes_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub recipe_service: Arc<dyn RecipeService>,
    pub ingredient_service: Arc<dyn IngredientService>,
}
