use crate::commands::RecipeCommand;
use crate::converters::{
    CategoryCommandToCategory, CategoryToCategoryCommand, Converter,
    IngredientCommandToIngredient, IngredientToIngredientCommand, NotesCommandToNotes,
    NotesToNotesCommand,
};
use crate::domain::Recipe;

#[derive(Debug, Clone, Default)]
pub struct RecipeToRecipeCommand {
    ingredient_converter: IngredientToIngredientCommand,
    notes_converter: NotesToNotesCommand,
    category_converter: CategoryToCategoryCommand,
}

impl RecipeToRecipeCommand {
    pub fn new(
        ingredient_converter: IngredientToIngredientCommand,
        notes_converter: NotesToNotesCommand,
        category_converter: CategoryToCategoryCommand,
    ) -> Self {
        Self {
            ingredient_converter,
            notes_converter,
            category_converter,
        }
    }
}

impl Converter<Recipe, RecipeCommand> for RecipeToRecipeCommand {
    fn convert(&self, source: &Recipe) -> RecipeCommand {
        RecipeCommand {
            id: source.id,
            description: source.description.clone(),
            prep_time: source.prep_time,
            cook_time: source.cook_time,
            servings: source.servings,
            source: source.source.clone(),
            url: source.url.clone(),
            directions: source.directions.clone(),
            difficulty: source.difficulty,
            notes: self.notes_converter.convert_opt(source.notes.as_ref()),
            ingredients: self.ingredient_converter.convert_all(&source.ingredients),
            categories: self.category_converter.convert_all(&source.categories),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeCommandToRecipe {
    category_converter: CategoryCommandToCategory,
    ingredient_converter: IngredientCommandToIngredient,
    notes_converter: NotesCommandToNotes,
}

impl RecipeCommandToRecipe {
    pub fn new(
        category_converter: CategoryCommandToCategory,
        ingredient_converter: IngredientCommandToIngredient,
        notes_converter: NotesCommandToNotes,
    ) -> Self {
        Self {
            category_converter,
            ingredient_converter,
            notes_converter,
        }
    }
}

impl Converter<RecipeCommand, Recipe> for RecipeCommandToRecipe {
    /// The resulting recipe has no image; images are never bound from forms.
    /// Ingredients are re-parented onto the recipe's id when it has one.
    fn convert(&self, source: &RecipeCommand) -> Recipe {
        let ingredients = source
            .ingredients
            .iter()
            .map(|command| {
                let mut ingredient = self.ingredient_converter.convert(command);
                if source.id.is_some() {
                    ingredient.recipe_id = source.id;
                }
                ingredient
            })
            .collect();

        Recipe {
            id: source.id,
            description: source.description.clone(),
            prep_time: source.prep_time,
            cook_time: source.cook_time,
            servings: source.servings,
            source: source.source.clone(),
            url: source.url.clone(),
            directions: source.directions.clone(),
            difficulty: source.difficulty,
            image: None,
            notes: self.notes_converter.convert_opt(source.notes.as_ref()),
            ingredients,
            categories: self.category_converter.convert_all(&source.categories),
        }
    }
}
