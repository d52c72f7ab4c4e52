use crate::commands::UnitOfMeasureCommand;
use crate::converters::Converter;
use crate::domain::UnitOfMeasure;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitOfMeasureToUnitOfMeasureCommand;

impl Converter<UnitOfMeasure, UnitOfMeasureCommand> for UnitOfMeasureToUnitOfMeasureCommand {
    fn convert(&self, source: &UnitOfMeasure) -> UnitOfMeasureCommand {
        UnitOfMeasureCommand {
            id: source.id,
            description: source.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitOfMeasureCommandToUnitOfMeasure;

impl Converter<UnitOfMeasureCommand, UnitOfMeasure> for UnitOfMeasureCommandToUnitOfMeasure {
    fn convert(&self, source: &UnitOfMeasureCommand) -> UnitOfMeasure {
        UnitOfMeasure {
            id: source.id,
            description: source.description.clone(),
        }
    }
}
