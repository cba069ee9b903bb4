//! Muddler: cocktail recipe generation and persistence.
//!
//! Supply a set of owned equipment, a set of owned ingredients, and a
//! desired mood; receive a machine-generated cocktail recipe that uses only
//! the supplied items, persisted for later retrieval, rating, and
//! favoriting.
//!
//! This facade crate re-exports the workspace surface and provides
//! [`RecipeService`], which composes the full write path: catalog resolution
//! → prompt construction → backend call → extraction → validation → name
//! reconciliation → atomic persistence → assembly of the created view.
//!
//! # Example
//!
//! ```no_run
//! use muddler::{GenerationBackend, GenerationConfig, RecipeService, establish_connection};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! muddler::init_tracing();
//!
//! let config = GenerationConfig::new(
//!     GenerationBackend::Anthropic,
//!     "claude-3-5-haiku-20241022",
//!     std::env::var("ANTHROPIC_API_KEY")?,
//! );
//! let service = RecipeService::from_config(&config)?;
//!
//! let mut conn = establish_connection()?;
//! let view = service
//!     .create_recipe(&mut conn, "user-1", &[1, 2], &[10, 11], 3)
//!     .await?;
//! println!("Created: {}", view.name);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod service;
mod telemetry;

pub use service::RecipeService;
pub use telemetry::init_tracing;

// Core domain types
pub use muddler_core::{
    AssembledIngredient, AssembledRecipeView, EquipmentCategory, EquipmentItem, GeneratedIngredient,
    GeneratedRecipe, GenerationRequest, IngredientCategory, IngredientItem, MatchedIngredient,
    Mood, RecipeMatches,
};

// Errors
pub use muddler_error::{
    ConfigError, DatabaseError, DatabaseErrorKind, GenerationUnavailable, MuddlerError,
    MuddlerErrorKind, MuddlerResult, RecipeParseError, RecipeParseErrorKind,
};

// Generation backends
pub use muddler_interface::{GenerationBackend, GenerationConfig, GenerationDriver};
pub use muddler_models::{AnthropicClient, OpenAiCompatibleClient, build_driver};

// Pipeline
pub use muddler_pipeline::{
    RecipeGenerator, build_prompt, extract_json, parse_recipe_response, reconcile,
};

// Database
pub use muddler_database::{
    CatalogRepository, EquipmentRow, IngredientRow, MoodRow, NewEquipmentRow, NewIngredientRow,
    NewMoodRow, PostgresCatalogRepository, PostgresRecipeRepository, Rating, RecipeRepository,
    RecipeRow, RecipeStepRow, assemble_recipe, assemble_recipes, establish_connection,
    establish_connection_to, run_migrations, seed_equipment, seed_ingredients, seed_moods,
};
