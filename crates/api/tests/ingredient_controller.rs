//! HTTP-level tests for the ingredient routes.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, FakeIngredientService, FakeRecipeService};
use recipes_core::commands::{IngredientCommand, RecipeCommand};

#[tokio::test]
async fn lists_ingredients_of_a_recipe() {
    let recipe_service = Arc::new(FakeRecipeService {
        command: Some(RecipeCommand {
            id: Some(1),
            ingredients: vec![IngredientCommand {
                id: Some(3),
                description: "salt".into(),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    });
    let app = build_test_app(recipe_service, Arc::new(FakeIngredientService::default()));

    let response = get(app, "/recipe/1/ingredients").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "recipe/ingredient/list");
    assert_eq!(json["data"]["recipe"]["ingredients"][0]["description"], "salt");
}

#[tokio::test]
async fn shows_a_single_ingredient() {
    let ingredient_service = Arc::new(FakeIngredientService {
        ingredient: Some(IngredientCommand {
            id: Some(3),
            recipe_id: Some(1),
            description: "salt".into(),
            ..Default::default()
        }),
    });
    let app = build_test_app(Arc::new(FakeRecipeService::default()), ingredient_service);

    let response = get(app, "/recipe/1/ingredient/3/show").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "recipe/ingredient/show");
    assert_eq!(json["data"]["ingredient"]["id"], 3);
}

#[tokio::test]
async fn missing_ingredient_returns_404_view() {
    let app = build_test_app(
        Arc::new(FakeRecipeService::default()),
        Arc::new(FakeIngredientService::default()),
    );

    let response = get(app, "/recipe/1/ingredient/3/show").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["view"], "404error");
}

#[tokio::test]
async fn non_numeric_ingredient_id_returns_400_view() {
    let app = build_test_app(
        Arc::new(FakeRecipeService::default()),
        Arc::new(FakeIngredientService::default()),
    );

    let response = get(app, "/recipe/1/ingredient/pepper/show").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["view"], "400error");
}
