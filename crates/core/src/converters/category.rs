use crate::commands::CategoryCommand;
use crate::converters::Converter;
use crate::domain::Category;

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryToCategoryCommand;

impl Converter<Category, CategoryCommand> for CategoryToCategoryCommand {
    fn convert(&self, source: &Category) -> CategoryCommand {
        CategoryCommand {
            id: source.id,
            description: source.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryCommandToCategory;

impl Converter<CategoryCommand, Category> for CategoryCommandToCategory {
    fn convert(&self, source: &CategoryCommand) -> Category {
        Category {
            id: source.id,
            description: source.description.clone(),
        }
    }
}
