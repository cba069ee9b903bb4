//! Batch assembly of hydrated recipe views.
//!
//! Given K persisted recipe rows, the assembler issues at most four bulk
//! reads (moods, ingredient links, steps, equipment links) independent of
//! K, then merges the grouped rows onto each recipe in input order. A naive
//! per-recipe fetch loop costs 1+4K queries; eliminating that fan-out is the
//! reason this module exists.

use crate::{DatabaseResult, EquipmentRow, IngredientRow, MoodRow, RecipeRow, RecipeStepRow};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use muddler_core::{AssembledIngredient, AssembledRecipeView, EquipmentItem, IngredientItem, Mood};
use muddler_error::DatabaseError;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Assemble fully-hydrated views for a batch of recipe rows.
///
/// Preserves input order. Never fails for empty input (returns an empty list
/// with zero queries issued). A view either has all four relation kinds
/// resolved or the recipe truly has none; a recipe without a mood reference
/// yields `mood: None`, not an error.
///
/// # Errors
///
/// Returns DatabaseError if a bulk read fails or a catalog row carries an
/// unknown category.
#[instrument(skip(conn, recipe_rows), fields(count = recipe_rows.len()))]
pub fn assemble_recipes(
    conn: &mut PgConnection,
    recipe_rows: Vec<RecipeRow>,
) -> DatabaseResult<Vec<AssembledRecipeView>> {
    if recipe_rows.is_empty() {
        return Ok(Vec::new());
    }

    let recipe_ids: Vec<i32> = recipe_rows.iter().map(|row| row.id).collect();

    let moods = group_moods(fetch_moods(conn, &recipe_rows)?);
    let ingredients = group_ingredients(fetch_ingredient_links(conn, &recipe_ids)?)?;
    let steps = group_steps(fetch_steps(conn, &recipe_ids)?);
    let equipment = group_equipment(fetch_equipment_links(conn, &recipe_ids)?)?;

    debug!(
        recipes = recipe_ids.len(),
        moods = moods.len(),
        "Merging bulk-fetched relations"
    );

    Ok(merge_views(recipe_rows, &moods, ingredients, steps, equipment))
}

/// Assemble a single recipe view.
///
/// The degenerate K=1 case of [`assemble_recipes`]; runs through the same
/// code path so both produce identical output for the same recipe.
///
/// # Errors
///
/// Returns DatabaseError if a bulk read fails.
pub fn assemble_recipe(
    conn: &mut PgConnection,
    recipe_row: RecipeRow,
) -> DatabaseResult<AssembledRecipeView> {
    let mut views = assemble_recipes(conn, vec![recipe_row])?;
    // assemble_recipes returns exactly one view per input row
    Ok(views.remove(0))
}

fn fetch_moods(conn: &mut PgConnection, recipe_rows: &[RecipeRow]) -> DatabaseResult<Vec<MoodRow>> {
    use crate::schema::moods::dsl;

    let mut mood_ids: Vec<i32> = recipe_rows.iter().filter_map(|row| row.mood_id).collect();
    mood_ids.sort_unstable();
    mood_ids.dedup();

    if mood_ids.is_empty() {
        return Ok(Vec::new());
    }

    dsl::moods
        .filter(dsl::id.eq_any(&mood_ids))
        .load(conn)
        .map_err(DatabaseError::from)
}

fn fetch_ingredient_links(
    conn: &mut PgConnection,
    recipe_ids: &[i32],
) -> DatabaseResult<Vec<(i32, String, IngredientRow)>> {
    use crate::schema::{ingredients, recipe_ingredients};

    recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq_any(recipe_ids))
        .order((
            recipe_ingredients::recipe_id.asc(),
            recipe_ingredients::ingredient_id.asc(),
        ))
        .select((
            recipe_ingredients::recipe_id,
            recipe_ingredients::amount,
            IngredientRow::as_select(),
        ))
        .load(conn)
        .map_err(DatabaseError::from)
}

fn fetch_steps(conn: &mut PgConnection, recipe_ids: &[i32]) -> DatabaseResult<Vec<RecipeStepRow>> {
    use crate::schema::recipe_steps::dsl;

    dsl::recipe_steps
        .filter(dsl::recipe_id.eq_any(recipe_ids))
        .order((dsl::recipe_id.asc(), dsl::step_number.asc()))
        .select(RecipeStepRow::as_select())
        .load(conn)
        .map_err(DatabaseError::from)
}

fn fetch_equipment_links(
    conn: &mut PgConnection,
    recipe_ids: &[i32],
) -> DatabaseResult<Vec<(i32, EquipmentRow)>> {
    use crate::schema::{equipment, recipe_equipment};

    recipe_equipment::table
        .inner_join(equipment::table)
        .filter(recipe_equipment::recipe_id.eq_any(recipe_ids))
        .order((
            recipe_equipment::recipe_id.asc(),
            recipe_equipment::equipment_id.asc(),
        ))
        .select((recipe_equipment::recipe_id, EquipmentRow::as_select()))
        .load(conn)
        .map_err(DatabaseError::from)
}

fn group_moods(rows: Vec<MoodRow>) -> HashMap<i32, Mood> {
    rows.into_iter()
        .map(|row| (row.id, Mood::from(row)))
        .collect()
}

fn group_ingredients(
    rows: Vec<(i32, String, IngredientRow)>,
) -> DatabaseResult<HashMap<i32, Vec<AssembledIngredient>>> {
    rows.into_iter()
        .try_fold(HashMap::new(), |mut acc: HashMap<i32, Vec<_>>, (recipe_id, amount, row)| {
            let ingredient = IngredientItem::try_from(row)?;
            acc.entry(recipe_id)
                .or_default()
                .push(AssembledIngredient { ingredient, amount });
            Ok(acc)
        })
}

fn group_steps(rows: Vec<RecipeStepRow>) -> HashMap<i32, Vec<String>> {
    rows.into_iter().fold(HashMap::new(), |mut acc, row| {
        acc.entry(row.recipe_id)
            .or_insert_with(Vec::new)
            .push(row.instruction);
        acc
    })
}

fn group_equipment(
    rows: Vec<(i32, EquipmentRow)>,
) -> DatabaseResult<HashMap<i32, Vec<EquipmentItem>>> {
    rows.into_iter()
        .try_fold(HashMap::new(), |mut acc: HashMap<i32, Vec<_>>, (recipe_id, row)| {
            acc.entry(recipe_id)
                .or_default()
                .push(EquipmentItem::try_from(row)?);
            Ok(acc)
        })
}

fn merge_views(
    recipe_rows: Vec<RecipeRow>,
    moods: &HashMap<i32, Mood>,
    mut ingredients: HashMap<i32, Vec<AssembledIngredient>>,
    mut steps: HashMap<i32, Vec<String>>,
    mut equipment: HashMap<i32, Vec<EquipmentItem>>,
) -> Vec<AssembledRecipeView> {
    recipe_rows
        .into_iter()
        .map(|row| AssembledRecipeView {
            mood: row.mood_id.and_then(|id| moods.get(&id).cloned()),
            ingredients: ingredients.remove(&row.id).unwrap_or_default(),
            steps: steps.remove(&row.id).unwrap_or_default(),
            equipment: equipment.remove(&row.id).unwrap_or_default(),
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            rating: row.rating,
            is_favorite: row.is_favorite,
            created_at: row.created_at,
        })
        .collect()
}
