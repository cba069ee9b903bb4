//! Repository for recipe persistence and lifecycle.

use crate::{
    DatabaseResult, NewRecipeEquipmentRow, NewRecipeIngredientRow, NewRecipeRow, NewRecipeStepRow,
    Rating, RecipeRow,
};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use muddler_core::{GeneratedRecipe, RecipeMatches};
use muddler_error::{DatabaseError, DatabaseErrorKind};
use tracing::{info, instrument};

/// Persistence operations for recipes and their owned relations.
pub trait RecipeRepository {
    /// Persist a validated and reconciled recipe as one atomic unit.
    ///
    /// Inserts the recipe row, the matched ingredient junctions, one step row
    /// per generated step numbered 1..N in original order, and the matched
    /// equipment junctions. Either all four groups commit or none do; a
    /// failure partway through leaves no partial recipe visible to readers.
    ///
    /// Unmatched names were already dropped by reconciliation, so the
    /// junction groups may legitimately be empty.
    ///
    /// # Returns
    /// The ID of the newly created recipe.
    ///
    /// # Errors
    /// Returns DatabaseError if the transaction aborts. The error is generic:
    /// the caller cannot act differently based on which sub-insert failed.
    fn persist_recipe(
        &mut self,
        recipe: &GeneratedRecipe,
        matches: &RecipeMatches,
        mood_id: Option<i32>,
        user_id: &str,
    ) -> DatabaseResult<i32>;

    /// Get a recipe summary row by ID.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails.
    fn get_recipe(&mut self, id: i32) -> DatabaseResult<Option<RecipeRow>>;

    /// List a user's recipe summary rows, most recent first.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails.
    fn list_recipes_for_user(&mut self, user_id: &str) -> DatabaseResult<Vec<RecipeRow>>;

    /// Set the rating on a recipe.
    ///
    /// # Errors
    /// Returns DatabaseError::NotFound if no recipe has the ID.
    fn set_rating(&mut self, id: i32, rating: Rating) -> DatabaseResult<()>;

    /// Set or clear the favorite flag on a recipe.
    ///
    /// # Errors
    /// Returns DatabaseError::NotFound if no recipe has the ID.
    fn set_favorite(&mut self, id: i32, is_favorite: bool) -> DatabaseResult<()>;

    /// Delete a recipe and all relation rows it owns.
    ///
    /// The delete runs in one transaction so relation rows can never outlive
    /// their recipe, independent of the schema-level cascade.
    ///
    /// # Errors
    /// Returns DatabaseError::NotFound if no recipe has the ID.
    fn delete_recipe(&mut self, id: i32) -> DatabaseResult<()>;
}

/// PostgreSQL implementation of RecipeRepository.
pub struct PostgresRecipeRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresRecipeRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl<'a> RecipeRepository for PostgresRecipeRepository<'a> {
    #[instrument(skip(self, recipe, matches), fields(recipe = %recipe.name, user = %user_id))]
    fn persist_recipe(
        &mut self,
        recipe: &GeneratedRecipe,
        matches: &RecipeMatches,
        mood_id: Option<i32>,
        user_id: &str,
    ) -> DatabaseResult<i32> {
        use crate::schema::{recipe_equipment, recipe_ingredients, recipe_steps, recipes};

        let result = self
            .conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let new_recipe = NewRecipeRow {
                    user_id: user_id.to_string(),
                    mood_id,
                    name: recipe.name.clone(),
                    description: recipe.description.clone(),
                };
                let recipe_row: RecipeRow = diesel::insert_into(recipes::table)
                    .values(&new_recipe)
                    .get_result(conn)?;

                let ingredient_rows: Vec<NewRecipeIngredientRow> = matches
                    .ingredients
                    .iter()
                    .map(|m| NewRecipeIngredientRow {
                        recipe_id: recipe_row.id,
                        ingredient_id: m.ingredient_id,
                        amount: m.amount.clone(),
                    })
                    .collect();
                diesel::insert_into(recipe_ingredients::table)
                    .values(&ingredient_rows)
                    .execute(conn)?;

                // Step numbering is contiguous from 1 and matches generation
                // order exactly.
                let step_rows: Vec<NewRecipeStepRow> = recipe
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(index, instruction)| NewRecipeStepRow {
                        recipe_id: recipe_row.id,
                        step_number: index as i32 + 1,
                        instruction: instruction.clone(),
                    })
                    .collect();
                diesel::insert_into(recipe_steps::table)
                    .values(&step_rows)
                    .execute(conn)?;

                let equipment_rows: Vec<NewRecipeEquipmentRow> = matches
                    .equipment_ids
                    .iter()
                    .map(|&equipment_id| NewRecipeEquipmentRow {
                        recipe_id: recipe_row.id,
                        equipment_id,
                    })
                    .collect();
                diesel::insert_into(recipe_equipment::table)
                    .values(&equipment_rows)
                    .execute(conn)?;

                Ok(recipe_row.id)
            })
            .map_err(DatabaseError::from)?;

        info!(
            recipe_id = result,
            ingredients = matches.ingredients.len(),
            steps = recipe.steps.len(),
            equipment = matches.equipment_ids.len(),
            "Persisted recipe"
        );
        Ok(result)
    }

    fn get_recipe(&mut self, id: i32) -> DatabaseResult<Option<RecipeRow>> {
        use crate::schema::recipes::dsl;

        dsl::recipes
            .find(id)
            .first(self.conn)
            .optional()
            .map_err(DatabaseError::from)
    }

    fn list_recipes_for_user(&mut self, user_id: &str) -> DatabaseResult<Vec<RecipeRow>> {
        use crate::schema::recipes::dsl;

        dsl::recipes
            .filter(dsl::user_id.eq(user_id))
            .order(dsl::created_at.desc())
            .load(self.conn)
            .map_err(DatabaseError::from)
    }

    fn set_rating(&mut self, id: i32, rating: Rating) -> DatabaseResult<()> {
        use crate::schema::recipes::dsl;

        let updated = diesel::update(dsl::recipes.find(id))
            .set(dsl::rating.eq(Some(rating.value())))
            .execute(self.conn)
            .map_err(DatabaseError::from)?;

        if updated == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound));
        }
        Ok(())
    }

    fn set_favorite(&mut self, id: i32, is_favorite: bool) -> DatabaseResult<()> {
        use crate::schema::recipes::dsl;

        let updated = diesel::update(dsl::recipes.find(id))
            .set(dsl::is_favorite.eq(is_favorite))
            .execute(self.conn)
            .map_err(DatabaseError::from)?;

        if updated == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_recipe(&mut self, id: i32) -> DatabaseResult<()> {
        use crate::schema::{recipe_equipment, recipe_ingredients, recipe_steps, recipes};

        let deleted = self
            .conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::delete(
                    recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(id)),
                )
                .execute(conn)?;
                diesel::delete(recipe_steps::table.filter(recipe_steps::recipe_id.eq(id)))
                    .execute(conn)?;
                diesel::delete(recipe_equipment::table.filter(recipe_equipment::recipe_id.eq(id)))
                    .execute(conn)?;
                diesel::delete(recipes::table.find(id)).execute(conn)
            })
            .map_err(DatabaseError::from)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound));
        }
        info!(recipe_id = id, "Deleted recipe and owned relations");
        Ok(())
    }
}
