//! PostgreSQL integration for Muddler.
//!
//! This crate provides the diesel schema, row models, repository
//! implementations, and the batch assembler for persisted recipes.
//!
//! # Features
//!
//! - Catalog reads (equipment, ingredients, moods) with bulk ID filtering
//! - Atomic multi-table recipe persistence
//! - Batch assembly of hydrated recipe views in a constant number of queries
//! - Cascading recipe deletion
//!
//! # Example
//!
//! ```rust,ignore
//! use muddler_database::{PostgresRecipeRepository, RecipeRepository, establish_connection};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut conn = establish_connection()?;
//! let mut repo = PostgresRecipeRepository::new(&mut conn);
//! let recipes = repo.list_recipes_for_user("user-1")?;
//! # Ok(())
//! # }
//! ```

mod assembler;
mod catalog_repository;
mod connection;
mod models;
mod recipe_repository;
mod seed;

pub mod schema;

pub use assembler::{assemble_recipe, assemble_recipes};
pub use catalog_repository::{CatalogRepository, PostgresCatalogRepository};
pub use connection::{establish_connection, establish_connection_to, run_migrations};
pub use models::{
    EquipmentRow, IngredientRow, MoodRow, NewEquipmentRow, NewIngredientRow, NewMoodRow,
    NewRecipeEquipmentRow, NewRecipeIngredientRow, NewRecipeRow, NewRecipeStepRow, Rating,
    RecipeRow, RecipeStepRow,
};
pub use recipe_repository::{PostgresRecipeRepository, RecipeRepository};
pub use seed::{seed_equipment, seed_ingredients, seed_moods};

use muddler_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
