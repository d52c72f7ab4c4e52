//! Tests for `RecipeServiceImpl` and `IngredientServiceImpl` over an
//! in-memory repository.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use common::FakeRecipeRepository;
use recipes_api::error::AppError;
use recipes_api::services::{
    IngredientService, IngredientServiceImpl, RecipeService, RecipeServiceImpl,
};
use recipes_core::commands::{IngredientCommand, NotesCommand, RecipeCommand};
use recipes_core::converters::IngredientToIngredientCommand;
use recipes_core::domain::{Ingredient, Recipe};
use recipes_core::error::CoreError;

fn recipe(id: i64, description: &str) -> Recipe {
    Recipe {
        id: Some(id),
        description: description.into(),
        directions: "Mix".into(),
        ..Default::default()
    }
}

fn service(repo: &Arc<FakeRecipeRepository>) -> RecipeServiceImpl {
    RecipeServiceImpl::with_repository(repo.clone())
}

#[tokio::test]
async fn get_recipes_delegates_to_find_all() {
    let repo = Arc::new(FakeRecipeRepository::with_recipes(vec![recipe(1, "Tacos")]));

    let recipes = service(&repo).get_recipes().await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(FakeRecipeRepository::count(&repo.find_all_calls), 1);
}

#[tokio::test]
async fn find_by_id_returns_the_entity() {
    let repo = Arc::new(FakeRecipeRepository::with_recipes(vec![recipe(23, "Test recipe")]));

    let found = service(&repo).find_by_id(23).await.unwrap();

    assert_eq!(found.description, "Test recipe");
    assert_eq!(FakeRecipeRepository::count(&repo.find_by_id_calls), 1);
    assert_eq!(FakeRecipeRepository::count(&repo.find_all_calls), 0);
}

#[tokio::test]
async fn find_by_id_fails_with_not_found() {
    let repo = Arc::new(FakeRecipeRepository::default());

    let err = service(&repo).find_by_id(5).await.unwrap_err();

    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: 5
        })
    );
}

#[tokio::test]
async fn find_command_by_id_converts_the_entity() {
    let repo = Arc::new(FakeRecipeRepository::with_recipes(vec![recipe(23, "Test recipe")]));

    let command = service(&repo).find_command_by_id(23).await.unwrap();

    assert_eq!(command.id, Some(23));
    assert_eq!(command.description, "Test recipe");
    assert_eq!(FakeRecipeRepository::count(&repo.find_by_id_calls), 1);
}

#[tokio::test]
async fn save_returns_command_with_generated_ids() {
    let repo = Arc::new(FakeRecipeRepository::default());
    let command = RecipeCommand {
        description: "Guacamole".into(),
        directions: "Mash".into(),
        notes: Some(NotesCommand {
            id: None,
            recipe_notes: "Use ripe avocados".into(),
        }),
        ingredients: vec![IngredientCommand {
            description: "avocado".into(),
            amount: Some(2.0),
            ..Default::default()
        }],
        ..Default::default()
    };

    let saved = service(&repo).save_recipe_command(command).await.unwrap();

    let id = saved.id.expect("saved command should carry the generated id");
    assert!(saved.notes.and_then(|n| n.id).is_some());
    assert_eq!(saved.ingredients[0].recipe_id, Some(id));
    assert!(saved.ingredients[0].id.is_some());
    assert_eq!(FakeRecipeRepository::count(&repo.save_calls), 1);
}

#[tokio::test]
async fn delete_by_id_delegates_once_even_for_unknown_ids() {
    let repo = Arc::new(FakeRecipeRepository::with_recipes(vec![recipe(2, "Chili")]));
    let service = service(&repo);

    service.delete_by_id(2).await.unwrap();
    service.delete_by_id(2).await.unwrap();

    assert_eq!(FakeRecipeRepository::count(&repo.delete_calls), 2);
    assert!(repo.recipes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ingredient_lookup_is_scoped_to_the_recipe() {
    let mut tacos = recipe(1, "Tacos");
    tacos.ingredients.push(Ingredient {
        id: Some(10),
        description: "tortillas".into(),
        recipe_id: Some(1),
        ..Default::default()
    });
    let repo = Arc::new(FakeRecipeRepository::with_recipes(vec![tacos, recipe(2, "Chili")]));
    let service = IngredientServiceImpl::new(repo, IngredientToIngredientCommand::default());

    let found = service.find_by_recipe_id_and_ingredient_id(1, 10).await.unwrap();
    assert_eq!(found.description, "tortillas");
    assert_eq!(found.recipe_id, Some(1));

    let err = service.find_by_recipe_id_and_ingredient_id(2, 10).await.unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound {
            entity: "Ingredient",
            ..
        })
    );

    let err = service.find_by_recipe_id_and_ingredient_id(99, 10).await.unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: 99
        })
    );
}
