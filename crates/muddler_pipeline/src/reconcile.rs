//! Name reconciliation against the catalog.
//!
//! Backends occasionally rephrase or hallucinate names. Matching is
//! case-insensitive exact equality against the catalog subset that was
//! offered in the prompt; unmatched names are dropped from the result
//! without error. This lossy policy is intentional: a persisted recipe may
//! list fewer ingredients than the backend claimed to use.

use muddler_core::{EquipmentItem, GeneratedRecipe, IngredientItem, MatchedIngredient, RecipeMatches};
use tracing::debug;

/// Resolve a generated recipe's names to catalog IDs.
///
/// Both relation kinds follow the same policy: case-insensitive exact match,
/// silent drop on miss, generation order preserved, duplicates collapsed to
/// the first occurrence (junction rows are keyed by catalog ID).
///
/// # Examples
///
/// ```
/// use muddler_core::{GeneratedIngredient, GeneratedRecipe, IngredientCategory, IngredientItem};
/// use muddler_pipeline::reconcile;
///
/// let catalog = vec![IngredientItem {
///     id: 7,
///     category: IngredientCategory::Spirit,
///     name: "Vodka".to_string(),
///     icon: None,
/// }];
/// let recipe = GeneratedRecipe {
///     name: "Test".to_string(),
///     description: String::new(),
///     ingredients: vec![GeneratedIngredient {
///         name: "VODKA".to_string(),
///         amount: "50 ml".to_string(),
///     }],
///     steps: vec!["Pour.".to_string()],
///     equipment_used: vec![],
/// };
///
/// let matches = reconcile(&recipe, &catalog, &[]);
/// assert_eq!(matches.ingredients[0].ingredient_id, 7);
/// ```
pub fn reconcile(
    recipe: &GeneratedRecipe,
    ingredient_catalog: &[IngredientItem],
    equipment_catalog: &[EquipmentItem],
) -> RecipeMatches {
    let mut matches = RecipeMatches::default();

    for generated in &recipe.ingredients {
        match find_ingredient(&generated.name, ingredient_catalog) {
            Some(id) => {
                if matches.ingredients.iter().any(|m| m.ingredient_id == id) {
                    debug!(name = %generated.name, id, "Duplicate ingredient match collapsed");
                    continue;
                }
                matches.ingredients.push(MatchedIngredient {
                    ingredient_id: id,
                    amount: generated.amount.clone(),
                });
            }
            None => {
                debug!(name = %generated.name, "Dropping unmatched generated ingredient");
            }
        }
    }

    for name in &recipe.equipment_used {
        match find_equipment(name, equipment_catalog) {
            Some(id) => {
                if matches.equipment_ids.contains(&id) {
                    debug!(name = %name, id, "Duplicate equipment match collapsed");
                    continue;
                }
                matches.equipment_ids.push(id);
            }
            None => {
                debug!(name = %name, "Dropping unmatched generated equipment");
            }
        }
    }

    matches
}

fn find_ingredient(name: &str, catalog: &[IngredientItem]) -> Option<i32> {
    let wanted = name.to_lowercase();
    catalog
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
        .map(|item| item.id)
}

fn find_equipment(name: &str, catalog: &[EquipmentItem]) -> Option<i32> {
    let wanted = name.to_lowercase();
    catalog
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
        .map(|item| item.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use muddler_core::{EquipmentCategory, GeneratedIngredient, IngredientCategory};

    fn ingredient(id: i32, name: &str) -> IngredientItem {
        IngredientItem {
            id,
            category: IngredientCategory::Spirit,
            name: name.to_string(),
            icon: None,
        }
    }

    fn equipment(id: i32, name: &str) -> EquipmentItem {
        EquipmentItem {
            id,
            category: EquipmentCategory::Shaking,
            name: name.to_string(),
            icon: None,
        }
    }

    fn recipe(ingredients: Vec<GeneratedIngredient>, equipment_used: Vec<String>) -> GeneratedRecipe {
        GeneratedRecipe {
            name: "Test".to_string(),
            description: String::new(),
            ingredients,
            steps: vec!["Stir.".to_string()],
            equipment_used,
        }
    }

    #[test]
    fn matches_case_insensitively() {
        let catalog = vec![ingredient(1, "Vodka"), ingredient(2, "Lime")];
        let r = recipe(
            vec![GeneratedIngredient {
                name: "VODKA".to_string(),
                amount: "50 ml".to_string(),
            }],
            vec![],
        );

        let matches = reconcile(&r, &catalog, &[]);
        assert_eq!(matches.ingredients.len(), 1);
        assert_eq!(matches.ingredients[0].ingredient_id, 1);
        assert_eq!(matches.ingredients[0].amount, "50 ml");
    }

    #[test]
    fn unmatched_names_are_silently_dropped() {
        let catalog = vec![ingredient(1, "Vodka"), ingredient(2, "Lime")];
        let r = recipe(
            vec![
                GeneratedIngredient {
                    name: "Tequila".to_string(),
                    amount: "50 ml".to_string(),
                },
                GeneratedIngredient {
                    name: "Lime".to_string(),
                    amount: "1 wedge".to_string(),
                },
            ],
            vec![],
        );

        let matches = reconcile(&r, &catalog, &[]);
        assert_eq!(matches.ingredients.len(), 1);
        assert_eq!(matches.ingredients[0].ingredient_id, 2);
    }

    #[test]
    fn equipment_follows_identical_policy() {
        let catalog = vec![equipment(10, "Shaker"), equipment(11, "Jigger")];
        let r = recipe(
            vec![GeneratedIngredient {
                name: "x".to_string(),
                amount: String::new(),
            }],
            vec!["shaker".to_string(), "Blender".to_string()],
        );

        let matches = reconcile(&r, &[], &catalog);
        assert_eq!(matches.equipment_ids, vec![10]);
    }

    #[test]
    fn duplicate_matches_collapse_to_first() {
        let catalog = vec![ingredient(1, "Vodka")];
        let r = recipe(
            vec![
                GeneratedIngredient {
                    name: "Vodka".to_string(),
                    amount: "50 ml".to_string(),
                },
                GeneratedIngredient {
                    name: "vodka".to_string(),
                    amount: "25 ml".to_string(),
                },
            ],
            vec![],
        );

        let matches = reconcile(&r, &catalog, &[]);
        assert_eq!(matches.ingredients.len(), 1);
        assert_eq!(matches.ingredients[0].amount, "50 ml");
    }

    #[test]
    fn generation_order_is_preserved() {
        let catalog = vec![ingredient(1, "Vodka"), ingredient(2, "Lime"), ingredient(3, "Mint")];
        let r = recipe(
            vec![
                GeneratedIngredient {
                    name: "Mint".to_string(),
                    amount: "6 leaves".to_string(),
                },
                GeneratedIngredient {
                    name: "Vodka".to_string(),
                    amount: "50 ml".to_string(),
                },
            ],
            vec![],
        );

        let matches = reconcile(&r, &catalog, &[]);
        let ids: Vec<i32> = matches.ingredients.iter().map(|m| m.ingredient_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
