#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use recipes_api::config::ServerConfig;
use recipes_api::error::{AppError, AppResult};
use recipes_api::router::build_app_router;
use recipes_api::services::{IngredientService, RecipeService};
use recipes_api::state::AppState;
use recipes_core::commands::{IngredientCommand, RecipeCommand};
use recipes_core::domain::Recipe;
use recipes_core::error::CoreError;
use recipes_core::types::DbId;
use recipes_db::repositories::RecipeRepository;

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router around the given services.
///
/// The pool never connects; only `/health` would touch it.
pub fn build_test_app(
    recipe_service: Arc<dyn RecipeService>,
    ingredient_service: Arc<dyn IngredientService>,
) -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/recipes_test")
        .expect("lazy pool");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        recipe_service,
        ingredient_service,
    };
    build_app_router(state, &config)
}

/// App whose ingredient service is never expected to be called.
pub fn recipe_app(recipe_service: Arc<dyn RecipeService>) -> Router {
    build_test_app(recipe_service, Arc::new(FakeIngredientService::default()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    post_as(app, uri, "application/x-www-form-urlencoded", body).await
}

pub async fn post_as(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Service stub: answers every id with the configured recipe or command and
/// records mutations.
#[derive(Default)]
pub struct FakeRecipeService {
    pub recipe: Option<Recipe>,
    pub command: Option<RecipeCommand>,
    /// Id assigned to commands passed to `save_recipe_command`.
    pub saved_id: DbId,
    pub saved: Mutex<Vec<RecipeCommand>>,
    pub deleted: Mutex<Vec<DbId>>,
    pub find_calls: AtomicUsize,
}

impl FakeRecipeService {
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeService for FakeRecipeService {
    async fn get_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.recipe.clone().into_iter().collect())
    }

    async fn find_by_id(&self, id: DbId) -> AppResult<Recipe> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.recipe.clone().ok_or_else(|| not_found("Recipe", id))
    }

    async fn find_command_by_id(&self, id: DbId) -> AppResult<RecipeCommand> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.command.clone().ok_or_else(|| not_found("Recipe", id))
    }

    async fn save_recipe_command(&self, mut command: RecipeCommand) -> AppResult<RecipeCommand> {
        self.saved.lock().unwrap().push(command.clone());
        command.id = Some(self.saved_id);
        Ok(command)
    }

    async fn delete_by_id(&self, id: DbId) -> AppResult<()> {
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeIngredientService {
    pub ingredient: Option<IngredientCommand>,
}

#[async_trait]
impl IngredientService for FakeIngredientService {
    async fn find_by_recipe_id_and_ingredient_id(
        &self,
        _recipe_id: DbId,
        ingredient_id: DbId,
    ) -> AppResult<IngredientCommand> {
        self.ingredient
            .clone()
            .ok_or_else(|| not_found("Ingredient", ingredient_id))
    }
}

/// In-memory repository that assigns sequential ids and counts calls.
#[derive(Default)]
pub struct FakeRecipeRepository {
    pub recipes: Mutex<Vec<Recipe>>,
    next_id: AtomicUsize,
    pub find_all_calls: AtomicUsize,
    pub find_by_id_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl FakeRecipeRepository {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let repo = Self::default();
        let max_id = recipes.iter().filter_map(|r| r.id).max().unwrap_or(0);
        repo.next_id.store(max_id as usize, Ordering::SeqCst);
        *repo.recipes.lock().unwrap() = recipes;
        repo
    }

    fn next_id(&self) -> DbId {
        (self.next_id.fetch_add(1, Ordering::SeqCst) + 1) as DbId
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeRepository for FakeRecipeRepository {
    async fn find_all(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn save(&self, mut recipe: Recipe) -> Result<Recipe, sqlx::Error> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        let id = match recipe.id {
            Some(id) => id,
            None => self.next_id(),
        };
        recipe.id = Some(id);
        if let Some(notes) = recipe.notes.as_mut() {
            notes.id.get_or_insert_with(|| self.next_id());
        }
        for ingredient in &mut recipe.ingredients {
            ingredient.id.get_or_insert_with(|| self.next_id());
            ingredient.recipe_id = Some(id);
        }

        let mut recipes = self.recipes.lock().unwrap();
        recipes.retain(|r| r.id != Some(id));
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.recipes.lock().unwrap().retain(|r| r.id != Some(id));
        Ok(())
    }
}
