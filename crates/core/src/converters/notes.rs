use crate::commands::NotesCommand;
use crate::converters::Converter;
use crate::domain::Notes;

#[derive(Debug, Clone, Copy, Default)]
pub struct NotesToNotesCommand;

impl Converter<Notes, NotesCommand> for NotesToNotesCommand {
    fn convert(&self, source: &Notes) -> NotesCommand {
        NotesCommand {
            id: source.id,
            recipe_notes: source.recipe_notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotesCommandToNotes;

impl Converter<NotesCommand, Notes> for NotesCommandToNotes {
    fn convert(&self, source: &NotesCommand) -> Notes {
        Notes {
            id: source.id,
            recipe_notes: source.recipe_notes.clone(),
        }
    }
}
