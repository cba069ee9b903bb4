//! Core data types for the Muddler recipe generation library.
//!
//! This crate provides the foundation data types used across all Muddler
//! interfaces: the immutable catalog entries (equipment, ingredients, moods),
//! the ephemeral generation request/result types, and the assembled
//! read-model returned to list and detail views.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod recipe;
mod request;
mod view;

pub use catalog::{EquipmentCategory, EquipmentItem, IngredientCategory, IngredientItem, Mood};
pub use recipe::{GeneratedIngredient, GeneratedRecipe, MatchedIngredient, RecipeMatches};
pub use request::GenerationRequest;
pub use view::{AssembledIngredient, AssembledRecipeView};
