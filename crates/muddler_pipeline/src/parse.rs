//! Validation and normalization of generation responses.

use muddler_core::{GeneratedIngredient, GeneratedRecipe};
use muddler_error::{RecipeParseError, RecipeParseErrorKind};
use serde_json::Value;

/// Parse extracted response content into a validated recipe.
///
/// Strict two-stage parse: the content is decoded into an untyped JSON tree,
/// then a single validation pass either yields the typed value or a tagged
/// error. The untyped tree never escapes this function.
///
/// `name`, `ingredients`, and `steps` are load-bearing for persistence and
/// are rejected when absent, mistyped, or empty. `description` and
/// `equipmentUsed` are cosmetic and normalize to an empty string / empty
/// list instead. Ingredient amounts are opaque display strings; no unit
/// validation is performed.
///
/// Pure function: parsing the same content twice yields structurally equal
/// results.
///
/// # Errors
///
/// Returns [`RecipeParseError`] with a kind identifying the offending field
/// (see [`RecipeParseErrorKind`]).
///
/// # Examples
///
/// ```
/// use muddler_pipeline::parse_recipe_response;
///
/// let content = r#"{
///     "name": "Mojito",
///     "ingredients": [{"name": "Rum", "amount": "50 ml"}],
///     "steps": ["Muddle mint.", "Add rum."]
/// }"#;
///
/// let recipe = parse_recipe_response(content).unwrap();
/// assert_eq!(recipe.name, "Mojito");
/// assert!(recipe.equipment_used.is_empty());
/// ```
pub fn parse_recipe_response(content: &str) -> Result<GeneratedRecipe, RecipeParseError> {
    let tree: Value = serde_json::from_str(content).map_err(|e| {
        let preview = content.chars().take(100).collect::<String>();
        tracing::error!(error = %e, json_preview = %preview, "JSON parsing failed");
        RecipeParseError::from(e)
    })?;

    let name = tree
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RecipeParseError::new(RecipeParseErrorKind::MissingName))?
        .to_string();

    let description = tree
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let ingredients = parse_ingredients(&tree)?;
    let steps = parse_steps(&tree)?;

    let equipment_used = tree
        .get("equipmentUsed")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(GeneratedRecipe {
        name,
        description,
        ingredients,
        steps,
        equipment_used,
    })
}

fn parse_ingredients(tree: &Value) -> Result<Vec<GeneratedIngredient>, RecipeParseError> {
    let items = tree
        .get("ingredients")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| RecipeParseError::new(RecipeParseErrorKind::MissingIngredients))?;

    let ingredients: Vec<GeneratedIngredient> = items
        .iter()
        .filter_map(|item| {
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())?;
            Some(GeneratedIngredient {
                name: name.to_string(),
                amount: amount_text(item.get("amount")),
            })
        })
        .collect();

    // Entries without a usable name were skipped; an all-unusable list is as
    // empty as a missing one.
    if ingredients.is_empty() {
        return Err(RecipeParseError::new(
            RecipeParseErrorKind::MissingIngredients,
        ));
    }

    Ok(ingredients)
}

fn parse_steps(tree: &Value) -> Result<Vec<String>, RecipeParseError> {
    let items = tree
        .get("steps")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| RecipeParseError::new(RecipeParseErrorKind::MissingSteps))?;

    let steps: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    if steps.is_empty() {
        return Err(RecipeParseError::new(RecipeParseErrorKind::MissingSteps));
    }

    Ok(steps)
}

/// Amounts are opaque display strings; a numeric amount is stringified, a
/// missing or mistyped one becomes empty.
fn amount_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
