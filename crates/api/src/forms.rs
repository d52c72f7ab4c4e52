//! Binding of the submitted recipe form onto a [`RecipeCommand`].
//!
//! All fields arrive as optional strings so that a malformed number becomes
//! a field error on the redisplayed form rather than a rejected request.

use std::collections::BTreeMap;
use std::str::FromStr;

use recipes_core::commands::{NotesCommand, RecipeCommand};
use recipes_core::domain::Difficulty;
use recipes_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Field name -> messages. Empty when the form is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fold `validator` constraint violations into this set.
    pub fn extend_from_validation(&mut self, errors: &ValidationErrors) {
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                self.add(field.to_string(), message);
            }
        }
    }
}

/// The raw `application/x-www-form-urlencoded` recipe form.
///
/// The time fields also accept the camelCase names (`prepTime`, `cookTime`)
/// posted by older form pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeForm {
    pub id: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "prepTime")]
    pub prep_time: Option<String>,
    #[serde(alias = "cookTime")]
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub directions: Option<String>,
    pub difficulty: Option<String>,
    pub notes: Option<String>,
}

impl RecipeForm {
    /// The submitted recipe id. `Ok(None)` for a new recipe.
    pub fn id(&self) -> Result<Option<DbId>, String> {
        parse_number(self.id.as_deref())
    }

    /// Bind the submitted fields onto `base` and run the command's
    /// constraints. Fields absent from the form keep their value in `base`.
    pub fn bind(self, base: RecipeCommand) -> (RecipeCommand, FieldErrors) {
        let mut errors = FieldErrors::default();
        let mut command = base;

        match self.id() {
            Ok(id) => command.id = id,
            Err(message) => errors.add("id", message),
        }

        if let Some(description) = self.description {
            command.description = description.trim().to_string();
        }
        if let Some(directions) = self.directions {
            command.directions = directions.trim().to_string();
        }
        if let Some(source) = self.source {
            command.source = non_blank(source);
        }
        if let Some(url) = self.url {
            command.url = non_blank(url);
        }

        bind_number(&mut errors, "prep_time", self.prep_time, &mut command.prep_time);
        bind_number(&mut errors, "cook_time", self.cook_time, &mut command.cook_time);
        bind_number(&mut errors, "servings", self.servings, &mut command.servings);

        if let Some(raw) = self.difficulty.as_deref().map(str::trim) {
            if !raw.is_empty() {
                match raw.parse::<Difficulty>() {
                    Ok(difficulty) => command.difficulty = difficulty,
                    Err(e) => errors.add("difficulty", e.to_string()),
                }
            }
        }

        if let Some(text) = self.notes {
            command.notes = match command.notes.take() {
                Some(notes) => Some(NotesCommand {
                    recipe_notes: text,
                    ..notes
                }),
                None if text.trim().is_empty() => None,
                None => Some(NotesCommand {
                    id: None,
                    recipe_notes: text,
                }),
            };
        }

        if let Err(violations) = command.validate() {
            errors.extend_from_validation(&violations);
        }

        (command, errors)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format!("'{value}' is not a valid number")),
    }
}

/// A present field replaces the target, blank clears it, garbage is an error
/// and leaves the target untouched.
fn bind_number<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    raw: Option<String>,
    target: &mut Option<T>,
) {
    if raw.is_none() {
        return;
    }
    match parse_number(raw.as_deref()) {
        Ok(value) => *target = value,
        Err(message) => errors.add(field, message),
    }
}
