//! Handlers for the `/recipe` resource.
//!
//! Pages are views over a `recipe` model; mutations answer with redirects.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use recipes_core::commands::RecipeCommand;
use recipes_core::domain::{Difficulty, Recipe};
use recipes_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{FormBody, IdPath};
use crate::forms::{FieldErrors, RecipeForm};
use crate::state::AppState;
use crate::views::{self, View};

#[derive(Debug, Serialize)]
pub struct RecipeModel {
    pub recipe: Recipe,
}

/// Model of the create/edit form.
#[derive(Debug, Serialize)]
pub struct RecipeFormModel {
    pub recipe: RecipeCommand,
    pub errors: FieldErrors,
    pub difficulties: [Difficulty; 4],
}

impl RecipeFormModel {
    fn new(recipe: RecipeCommand, errors: FieldErrors) -> Self {
        Self {
            recipe,
            errors,
            difficulties: Difficulty::ALL,
        }
    }
}

/// GET /recipe/new
pub async fn new_recipe() -> View<RecipeFormModel> {
    View::ok(
        views::RECIPE_FORM,
        RecipeFormModel::new(RecipeCommand::default(), FieldErrors::default()),
    )
}

/// GET /recipe/{id}/show
pub async fn show(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<View<RecipeModel>> {
    let recipe = state.recipe_service.find_by_id(id).await?;
    Ok(View::ok(views::RECIPE_SHOW, RecipeModel { recipe }))
}

/// GET /recipe/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<View<RecipeFormModel>> {
    let command = state.recipe_service.find_command_by_id(id).await?;
    Ok(View::ok(
        views::RECIPE_FORM,
        RecipeFormModel::new(command, FieldErrors::default()),
    ))
}

/// POST /recipe
///
/// Binds the form onto a blank command, or onto the stored command when the
/// form carries an id so that ingredients and categories survive an edit.
/// Constraint violations redisplay the form with `200 OK`.
pub async fn save_or_update(
    State(state): State<AppState>,
    FormBody(form): FormBody<RecipeForm>,
) -> AppResult<Response> {
    let base = match form.id() {
        Ok(Some(id)) => state.recipe_service.find_command_by_id(id).await?,
        _ => RecipeCommand::default(),
    };

    let (command, errors) = form.bind(base);
    if !errors.is_empty() {
        tracing::debug!(fields = ?errors, "Recipe form rejected");
        return Ok(
            View::ok(views::RECIPE_FORM, RecipeFormModel::new(command, errors)).into_response(),
        );
    }

    let saved = state.recipe_service.save_recipe_command(command).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::InternalError("saved recipe has no id".into()))?;

    Ok(views::redirect_to_recipe(id).into_response())
}

/// GET /recipe/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Response> {
    state.recipe_service.delete_by_id(id).await?;
    Ok(views::redirect_to_index().into_response())
}
