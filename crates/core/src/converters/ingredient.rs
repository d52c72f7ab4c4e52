use crate::commands::IngredientCommand;
use crate::converters::{
    Converter, UnitOfMeasureCommandToUnitOfMeasure, UnitOfMeasureToUnitOfMeasureCommand,
};
use crate::domain::Ingredient;

#[derive(Debug, Clone, Default)]
pub struct IngredientToIngredientCommand {
    uom_converter: UnitOfMeasureToUnitOfMeasureCommand,
}

impl IngredientToIngredientCommand {
    pub fn new(uom_converter: UnitOfMeasureToUnitOfMeasureCommand) -> Self {
        Self { uom_converter }
    }
}

impl Converter<Ingredient, IngredientCommand> for IngredientToIngredientCommand {
    fn convert(&self, source: &Ingredient) -> IngredientCommand {
        IngredientCommand {
            id: source.id,
            recipe_id: source.recipe_id,
            description: source.description.clone(),
            amount: source.amount,
            uom: self.uom_converter.convert_opt(source.uom.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IngredientCommandToIngredient {
    uom_converter: UnitOfMeasureCommandToUnitOfMeasure,
}

impl IngredientCommandToIngredient {
    pub fn new(uom_converter: UnitOfMeasureCommandToUnitOfMeasure) -> Self {
        Self { uom_converter }
    }
}

impl Converter<IngredientCommand, Ingredient> for IngredientCommandToIngredient {
    fn convert(&self, source: &IngredientCommand) -> Ingredient {
        Ingredient {
            id: source.id,
            description: source.description.clone(),
            amount: source.amount,
            uom: self.uom_converter.convert_opt(source.uom.as_ref()),
            recipe_id: source.recipe_id,
        }
    }
}
