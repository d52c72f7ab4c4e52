//! Named views.
//!
//! A handler picks a view name and a model; the response body is the
//! `{ "view": name, "data": model }` envelope with the chosen status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use recipes_core::types::DbId;
use serde::Serialize;

pub const INDEX: &str = "index";
pub const RECIPE_SHOW: &str = "recipe/show";
pub const RECIPE_FORM: &str = "recipe/recipeform";
pub const INGREDIENT_LIST: &str = "recipe/ingredient/list";
pub const INGREDIENT_SHOW: &str = "recipe/ingredient/show";
pub const BAD_REQUEST: &str = "400error";
pub const NOT_FOUND: &str = "404error";
pub const INTERNAL_ERROR: &str = "500error";

/// A view name plus the model it renders.
#[derive(Debug)]
pub struct View<T> {
    pub status: StatusCode,
    pub name: &'static str,
    pub model: T,
}

impl<T: Serialize> View<T> {
    /// A view rendered with `200 OK`.
    pub fn ok(name: &'static str, model: T) -> Self {
        Self {
            status: StatusCode::OK,
            name,
            model,
        }
    }

    pub fn with_status(status: StatusCode, name: &'static str, model: T) -> Self {
        Self {
            status,
            name,
            model,
        }
    }
}

#[derive(Serialize)]
struct ViewBody<'a, T> {
    view: &'a str,
    data: &'a T,
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        let body = ViewBody {
            view: self.name,
            data: &self.model,
        };
        (self.status, Json(body)).into_response()
    }
}

/// `303 See Other` to the show page of a recipe.
pub fn redirect_to_recipe(id: DbId) -> Redirect {
    Redirect::to(&format!("/recipe/{id}/show"))
}

/// `303 See Other` to the recipe list.
pub fn redirect_to_index() -> Redirect {
    Redirect::to("/")
}
