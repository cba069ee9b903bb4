//! End-to-end recipe creation and read composition.

use diesel::pg::PgConnection;
use muddler_core::{AssembledRecipeView, GenerationRequest};
use muddler_database::{
    CatalogRepository, PostgresCatalogRepository, PostgresRecipeRepository, RecipeRepository,
    assemble_recipe, assemble_recipes,
};
use muddler_error::{ConfigError, DatabaseError, DatabaseErrorKind, MuddlerResult};
use muddler_interface::GenerationConfig;
use muddler_models::build_driver;
use muddler_pipeline::{RecipeGenerator, reconcile};
use tracing::{info, instrument};

/// Composes the whole write path behind one call.
///
/// The service owns the generator; database access is borrowed per call so
/// callers keep control of connection management. The backend call inside
/// [`RecipeService::create_recipe`] is the only suspension point; everything
/// else is in-process and fast.
pub struct RecipeService {
    generator: RecipeGenerator,
}

impl RecipeService {
    /// Create a service over an existing generator.
    pub fn new(generator: RecipeGenerator) -> Self {
        Self { generator }
    }

    /// Create a service from a generation configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured backend's client cannot be built.
    pub fn from_config(config: &GenerationConfig) -> MuddlerResult<Self> {
        Ok(Self::new(RecipeGenerator::new(build_driver(config)?)))
    }

    /// Generate and persist a recipe for a user's selection.
    ///
    /// Resolves the selected catalog subsets, rejects empty selections,
    /// generates a recipe constrained to them, reconciles the generated
    /// names, persists everything atomically, and returns the assembled view
    /// of the new recipe.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] when the equipment or ingredient selection is empty
    ///   or resolves to no catalog records;
    /// - [`muddler_error::DatabaseError`] with kind `NotFound` when the mood
    ///   does not exist;
    /// - [`muddler_error::GenerationUnavailable`] /
    ///   [`muddler_error::RecipeParseError`] from the generation pipeline;
    /// - a generic database error if the persistence transaction aborts.
    #[instrument(skip(self, conn), fields(user = %user_id, mood_id))]
    pub async fn create_recipe(
        &self,
        conn: &mut PgConnection,
        user_id: &str,
        equipment_ids: &[i32],
        ingredient_ids: &[i32],
        mood_id: i32,
    ) -> MuddlerResult<AssembledRecipeView> {
        if equipment_ids.is_empty() {
            return Err(ConfigError::new("Equipment selection must not be empty").into());
        }
        if ingredient_ids.is_empty() {
            return Err(ConfigError::new("Ingredient selection must not be empty").into());
        }

        let (equipment, ingredients, mood) = {
            let mut catalog = PostgresCatalogRepository::new(conn);
            let equipment = catalog.fetch_equipment_by_ids(equipment_ids)?;
            let ingredients = catalog.fetch_ingredients_by_ids(ingredient_ids)?;
            let mood = catalog
                .fetch_mood_by_id(mood_id)?
                .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;
            (equipment, ingredients, mood)
        };

        if equipment.is_empty() {
            return Err(ConfigError::new("Equipment selection resolved to no catalog records").into());
        }
        if ingredients.is_empty() {
            return Err(
                ConfigError::new("Ingredient selection resolved to no catalog records").into(),
            );
        }

        let request = GenerationRequest {
            equipment_names: equipment.iter().map(|e| e.name.clone()).collect(),
            ingredient_names: ingredients.iter().map(|i| i.name.clone()).collect(),
            mood_name: mood.name.clone(),
            mood_description: mood.description.clone(),
            mood_examples: mood.examples.clone(),
        };

        let recipe = self.generator.generate_recipe(&request).await?;
        let matches = reconcile(&recipe, &ingredients, &equipment);

        let recipe_id = {
            let mut repo = PostgresRecipeRepository::new(conn);
            repo.persist_recipe(&recipe, &matches, Some(mood.id), user_id)?
        };
        info!(recipe_id, "Created recipe");

        let row = {
            let mut repo = PostgresRecipeRepository::new(conn);
            repo.get_recipe(recipe_id)?
                .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?
        };
        Ok(assemble_recipe(conn, row)?)
    }

    /// List a user's recipes as fully-hydrated views, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a database error if a read fails.
    pub fn list_user_recipes(
        &self,
        conn: &mut PgConnection,
        user_id: &str,
    ) -> MuddlerResult<Vec<AssembledRecipeView>> {
        let rows = {
            let mut repo = PostgresRecipeRepository::new(conn);
            repo.list_recipes_for_user(user_id)?
        };
        Ok(assemble_recipes(conn, rows)?)
    }

    /// Get one recipe as a fully-hydrated view.
    ///
    /// # Errors
    ///
    /// Returns a database error if a read fails.
    pub fn get_recipe_view(
        &self,
        conn: &mut PgConnection,
        recipe_id: i32,
    ) -> MuddlerResult<Option<AssembledRecipeView>> {
        let row = {
            let mut repo = PostgresRecipeRepository::new(conn);
            repo.get_recipe(recipe_id)?
        };
        match row {
            Some(row) => Ok(Some(assemble_recipe(conn, row)?)),
            None => Ok(None),
        }
    }
}
