//! The validated generation result.

use serde::{Deserialize, Serialize};

/// One ingredient line of a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    /// Ingredient name as produced by the backend
    pub name: String,
    /// Amount as opaque display text ("50 ml", "2 dashes", ...)
    pub amount: String,
}

/// A recipe recovered from a generation response.
///
/// Invariant: `ingredients` and `steps` are non-empty; the validator rejects
/// the whole structure otherwise, before anything reaches persistence.
/// `description` and `equipment_used` default to empty when the backend
/// omits them.
///
/// # Examples
///
/// ```
/// use muddler_core::{GeneratedIngredient, GeneratedRecipe};
///
/// let recipe = GeneratedRecipe {
///     name: "Sunrise".to_string(),
///     description: String::new(),
///     ingredients: vec![GeneratedIngredient {
///         name: "Vodka".to_string(),
///         amount: "50 ml".to_string(),
///     }],
///     steps: vec!["Shake with ice.".to_string()],
///     equipment_used: vec![],
/// };
///
/// assert!(!recipe.ingredients.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Recipe name, non-empty
    pub name: String,
    /// Recipe description, may be empty
    pub description: String,
    /// Ordered ingredient lines, non-empty
    pub ingredients: Vec<GeneratedIngredient>,
    /// Ordered preparation steps, non-empty
    pub steps: Vec<String>,
    /// Names of equipment the backend claims to use, may be empty
    pub equipment_used: Vec<String>,
}

/// A generated ingredient line resolved to a catalog identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedIngredient {
    /// Catalog ingredient ID
    pub ingredient_id: i32,
    /// Amount text carried over from the generated line
    pub amount: String,
}

/// The reconciler's output: generated names resolved against the catalog.
///
/// Unmatched names are already dropped: a recipe may legitimately carry
/// fewer ingredients here than the backend claimed to use. Both lists
/// preserve generation order and are deduplicated by catalog ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecipeMatches {
    /// Matched ingredient lines
    pub ingredients: Vec<MatchedIngredient>,
    /// Matched equipment IDs
    pub equipment_ids: Vec<i32>,
}
