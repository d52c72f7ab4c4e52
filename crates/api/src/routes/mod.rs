pub mod recipe;

use axum::routing::get;
use axum::Router;

use crate::handlers::{health, index};
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                                          recipe list
/// /health                                    database and schema status
/// /recipe                                    save or update (POST form)
/// /recipe/new                                blank form
/// /recipe/{id}/show                          show
/// /recipe/{id}/update                        edit form
/// /recipe/{id}/delete                        delete, redirect to /
/// /recipe/{id}/ingredients                   ingredient list
/// /recipe/{id}/ingredient/{ingredient_id}/show  ingredient
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index::list))
        .route("/health", get(health::check))
        .nest("/recipe", recipe::router())
}
