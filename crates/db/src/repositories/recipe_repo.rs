//! Repository for the `recipe` table and its `notes`, `ingredient` and
//! `recipe_category` children.

use async_trait::async_trait;
use recipes_core::domain::{Ingredient, Notes, Recipe};
use recipes_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::recipe::{IngredientRow, NotesRow, RecipeCategoryRow, RecipeRow};

/// Column list shared across recipe queries.
const COLUMNS: &str =
    "id, description, prep_time, cook_time, servings, source, url, directions, difficulty, image";

/// Persistence gateway for recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes with their relations. No ordering is guaranteed.
    async fn find_all(&self) -> Result<Vec<Recipe>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Recipe>, sqlx::Error>;

    /// Insert or update a recipe and its children, returning the stored state
    /// with every generated id filled in.
    async fn save(&self, recipe: Recipe) -> Result<Recipe, sqlx::Error>;

    /// Delete a recipe and its children. Deleting an unknown id is a no-op.
    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error>;
}

/// [`RecipeRepository`] backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the relations of `rows` in three queries and assemble entities.
    async fn assemble(&self, rows: Vec<RecipeRow>) -> Result<Vec<Recipe>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();

        let notes = sqlx::query_as::<_, NotesRow>(
            "SELECT id, recipe_id, recipe_notes FROM notes WHERE recipe_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let ingredients = sqlx::query_as::<_, IngredientRow>(
            "SELECT i.id, i.recipe_id, i.description, i.amount,
                    u.id AS uom_id, u.description AS uom_description
             FROM ingredient i
             LEFT JOIN unit_of_measure u ON u.id = i.uom_id
             WHERE i.recipe_id = ANY($1)
             ORDER BY i.id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let categories = sqlx::query_as::<_, RecipeCategoryRow>(
            "SELECT rc.recipe_id, c.id, c.description
             FROM recipe_category rc
             JOIN category c ON c.id = rc.category_id
             WHERE rc.recipe_id = ANY($1)
             ORDER BY c.description",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_recipe(&notes, &ingredients, &categories))
            .collect()
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn find_all(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipe");
        let rows = sqlx::query_as::<_, RecipeRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        self.assemble(rows).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipe WHERE id = $1");
        let row = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id = upsert_recipe(&mut tx, &recipe).await?;
        save_notes(&mut tx, id, recipe.notes.as_ref()).await?;
        save_ingredients(&mut tx, id, &recipe.ingredients).await?;
        save_categories(&mut tx, id, &recipe).await?;

        tx.commit().await?;
        tracing::debug!(recipe_id = id, "Recipe saved");

        self.find_by_id(id).await?.ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipe WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(recipe_id = id, rows = result.rows_affected(), "Recipe deleted");
        Ok(())
    }
}

/// Update the recipe row in place, or insert a new one when the recipe has
/// no id or its id is unknown. Returns the row id.
///
/// The stored image is kept when the incoming recipe carries none.
async fn upsert_recipe(conn: &mut PgConnection, recipe: &Recipe) -> Result<DbId, sqlx::Error> {
    if let Some(id) = recipe.id {
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE recipe SET
                description = $2,
                prep_time = $3,
                cook_time = $4,
                servings = $5,
                source = $6,
                url = $7,
                directions = $8,
                difficulty = $9,
                image = COALESCE($10, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&recipe.description)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.servings)
        .bind(&recipe.source)
        .bind(&recipe.url)
        .bind(&recipe.directions)
        .bind(recipe.difficulty.as_str())
        .bind(&recipe.image)
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(id) = updated {
            return Ok(id);
        }
    }

    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO recipe
            (description, prep_time, cook_time, servings, source, url, directions, difficulty, image)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id",
    )
    .bind(&recipe.description)
    .bind(recipe.prep_time)
    .bind(recipe.cook_time)
    .bind(recipe.servings)
    .bind(&recipe.source)
    .bind(&recipe.url)
    .bind(&recipe.directions)
    .bind(recipe.difficulty.as_str())
    .bind(&recipe.image)
    .fetch_one(&mut *conn)
    .await
}

/// One notes row per recipe; absent notes remove the row.
async fn save_notes(
    conn: &mut PgConnection,
    recipe_id: DbId,
    notes: Option<&Notes>,
) -> Result<(), sqlx::Error> {
    match notes {
        Some(notes) => {
            sqlx::query(
                "INSERT INTO notes (recipe_id, recipe_notes) VALUES ($1, $2)
                 ON CONFLICT (recipe_id) DO UPDATE SET recipe_notes = EXCLUDED.recipe_notes",
            )
            .bind(recipe_id)
            .bind(&notes.recipe_notes)
            .execute(&mut *conn)
            .await?;
        }
        None => {
            sqlx::query("DELETE FROM notes WHERE recipe_id = $1")
                .bind(recipe_id)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}

/// Replace the recipe's ingredient set: rows not present in `ingredients`
/// are removed, known ids are updated, the rest are inserted.
async fn save_ingredients(
    conn: &mut PgConnection,
    recipe_id: DbId,
    ingredients: &[Ingredient],
) -> Result<(), sqlx::Error> {
    let kept: Vec<DbId> = ingredients.iter().filter_map(|i| i.id).collect();

    sqlx::query("DELETE FROM ingredient WHERE recipe_id = $1 AND NOT (id = ANY($2))")
        .bind(recipe_id)
        .bind(&kept)
        .execute(&mut *conn)
        .await?;

    for ingredient in ingredients {
        let uom_id = ingredient.uom.as_ref().and_then(|u| u.id);

        if let Some(id) = ingredient.id {
            let result = sqlx::query(
                "UPDATE ingredient SET description = $3, amount = $4, uom_id = $5
                 WHERE id = $1 AND recipe_id = $2",
            )
            .bind(id)
            .bind(recipe_id)
            .bind(&ingredient.description)
            .bind(ingredient.amount)
            .bind(uom_id)
            .execute(&mut *conn)
            .await?;

            if result.rows_affected() > 0 {
                continue;
            }
        }

        sqlx::query(
            "INSERT INTO ingredient (recipe_id, description, amount, uom_id)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(recipe_id)
        .bind(&ingredient.description)
        .bind(ingredient.amount)
        .bind(uom_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Relink the recipe to its categories. Categories are reference data, so
/// entries without an id are skipped.
async fn save_categories(
    conn: &mut PgConnection,
    recipe_id: DbId,
    recipe: &Recipe,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM recipe_category WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?;

    for category in &recipe.categories {
        let Some(category_id) = category.id else {
            tracing::debug!(recipe_id, description = %category.description, "Skipping unsaved category");
            continue;
        };
        sqlx::query(
            "INSERT INTO recipe_category (recipe_id, category_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(recipe_id)
        .bind(category_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
