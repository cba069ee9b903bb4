//! Catalog seeding helpers.
//!
//! Catalog rows are created only here; nothing in the pipeline mutates them.

use crate::{DatabaseResult, EquipmentRow, IngredientRow, MoodRow, NewEquipmentRow, NewIngredientRow, NewMoodRow};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use muddler_error::DatabaseError;
use tracing::info;

/// Insert equipment catalog entries, returning the created rows.
///
/// # Errors
/// Returns DatabaseError if the insert fails.
pub fn seed_equipment(
    conn: &mut PgConnection,
    rows: &[NewEquipmentRow],
) -> DatabaseResult<Vec<EquipmentRow>> {
    use crate::schema::equipment;

    let created: Vec<EquipmentRow> = diesel::insert_into(equipment::table)
        .values(rows)
        .get_results(conn)
        .map_err(DatabaseError::from)?;
    info!(count = created.len(), "Seeded equipment catalog");
    Ok(created)
}

/// Insert ingredient catalog entries, returning the created rows.
///
/// # Errors
/// Returns DatabaseError if the insert fails.
pub fn seed_ingredients(
    conn: &mut PgConnection,
    rows: &[NewIngredientRow],
) -> DatabaseResult<Vec<IngredientRow>> {
    use crate::schema::ingredients;

    let created: Vec<IngredientRow> = diesel::insert_into(ingredients::table)
        .values(rows)
        .get_results(conn)
        .map_err(DatabaseError::from)?;
    info!(count = created.len(), "Seeded ingredient catalog");
    Ok(created)
}

/// Insert mood catalog entries, returning the created rows.
///
/// # Errors
/// Returns DatabaseError if the insert fails.
pub fn seed_moods(conn: &mut PgConnection, rows: &[NewMoodRow]) -> DatabaseResult<Vec<MoodRow>> {
    use crate::schema::moods;

    let created: Vec<MoodRow> = diesel::insert_into(moods::table)
        .values(rows)
        .get_results(conn)
        .map_err(DatabaseError::from)?;
    info!(count = created.len(), "Seeded mood catalog");
    Ok(created)
}
