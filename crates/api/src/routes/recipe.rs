use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{ingredient, recipe};
use crate::state::AppState;

/// Routes mounted at `/recipe`.
///
/// ```text
/// POST   /                                  -> save_or_update
/// GET    /new                               -> new_recipe
/// GET    /{id}/show                         -> show
/// GET    /{id}/update                       -> update_form
/// GET    /{id}/delete                       -> delete
/// GET    /{id}/ingredients                  -> ingredient::list
/// GET    /{id}/ingredient/{ingredient_id}/show -> ingredient::show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(recipe::save_or_update))
        .route("/new", get(recipe::new_recipe))
        .route("/{id}/show", get(recipe::show))
        .route("/{id}/update", get(recipe::update_form))
        .route("/{id}/delete", get(recipe::delete))
        .route("/{id}/ingredients", get(ingredient::list))
        .route("/{id}/ingredient/{ingredient_id}/show", get(ingredient::show))
}
