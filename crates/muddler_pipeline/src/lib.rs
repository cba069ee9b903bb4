//! The Muddler recipe generation pipeline.
//!
//! One generation request flows through this crate in a straight line:
//! [`build_prompt`] turns catalog inputs into a constrained instruction,
//! a [`muddler_interface::GenerationDriver`] returns the backend's raw text,
//! [`extract_json`] recovers the JSON payload from whatever wrapping the
//! backend added, [`parse_recipe_response`] validates it into a typed
//! [`muddler_core::GeneratedRecipe`], and [`reconcile`] resolves generated
//! names back to catalog IDs. [`RecipeGenerator`] strings the first four
//! stages together over a boxed driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod generator;
mod parse;
mod prompt;
mod reconcile;

pub use extraction::extract_json;
pub use generator::RecipeGenerator;
pub use parse::parse_recipe_response;
pub use prompt::build_prompt;
pub use reconcile::reconcile;
