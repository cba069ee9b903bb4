//! The assembled read-model for list and detail views.

use crate::{EquipmentItem, IngredientItem, Mood};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A resolved ingredient line: catalog entry plus the persisted amount text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledIngredient {
    /// The catalog ingredient record
    pub ingredient: IngredientItem,
    /// Amount as stored on the junction row
    pub amount: String,
}

/// A fully-hydrated persisted recipe.
///
/// Constructed on demand by the batch assembler; never cached. A view either
/// has all four relation kinds resolved or the recipe truly has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledRecipeView {
    /// Recipe identifier
    pub id: i32,
    /// Opaque owning-user identifier
    pub user_id: String,
    /// Recipe name
    pub name: String,
    /// Recipe description, may be empty
    pub description: String,
    /// The resolved mood, absent when the recipe carries no mood reference
    pub mood: Option<Mood>,
    /// Resolved ingredient lines in catalog order
    pub ingredients: Vec<AssembledIngredient>,
    /// Preparation steps ordered by step number
    pub steps: Vec<String>,
    /// Resolved equipment entries
    pub equipment: Vec<EquipmentItem>,
    /// User rating, 1-5, absent until rated
    pub rating: Option<i16>,
    /// Whether the owner favorited the recipe
    pub is_favorite: bool,
    /// Creation timestamp
    pub created_at: NaiveDateTime,
}
