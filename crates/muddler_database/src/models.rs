//! Diesel row models and conversions to core types.
//!
//! Catalog categories are stored as text and parsed back into their closed
//! enumerations at the row boundary; a row carrying an unknown category is a
//! data error, not a panic.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use muddler_core::{
    EquipmentCategory, EquipmentItem, IngredientCategory, IngredientItem, Mood,
};
use muddler_error::{DatabaseError, DatabaseErrorKind};
use serde::Serialize;
use std::str::FromStr;

/// Database row for the equipment catalog.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::equipment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EquipmentRow {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub icon: Option<String>,
}

impl TryFrom<EquipmentRow> for EquipmentItem {
    type Error = DatabaseError;

    fn try_from(row: EquipmentRow) -> Result<Self, Self::Error> {
        let category = EquipmentCategory::from_str(&row.category).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
                "Unknown equipment category '{}' on row {}",
                row.category, row.id
            )))
        })?;
        Ok(EquipmentItem {
            id: row.id,
            category,
            name: row.name,
            icon: row.icon,
        })
    }
}

/// Insertable equipment catalog entry, used only by seeding.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::equipment)]
pub struct NewEquipmentRow {
    pub category: String,
    pub name: String,
    pub icon: Option<String>,
}

/// Database row for the ingredient catalog.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IngredientRow {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub icon: Option<String>,
}

impl TryFrom<IngredientRow> for IngredientItem {
    type Error = DatabaseError;

    fn try_from(row: IngredientRow) -> Result<Self, Self::Error> {
        let category = IngredientCategory::from_str(&row.category).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
                "Unknown ingredient category '{}' on row {}",
                row.category, row.id
            )))
        })?;
        Ok(IngredientItem {
            id: row.id,
            category,
            name: row.name,
            icon: row.icon,
        })
    }
}

/// Insertable ingredient catalog entry, used only by seeding.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredientRow {
    pub category: String,
    pub name: String,
    pub icon: Option<String>,
}

/// Database row for the mood catalog.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::moods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MoodRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub examples: String,
}

impl From<MoodRow> for Mood {
    fn from(row: MoodRow) -> Self {
        Mood {
            id: row.id,
            name: row.name,
            description: row.description,
            examples: row.examples,
        }
    }
}

/// Insertable mood catalog entry, used only by seeding.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::moods)]
pub struct NewMoodRow {
    pub name: String,
    pub description: String,
    pub examples: String,
}

/// Database row for a persisted recipe.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: i32,
    pub user_id: String,
    pub mood_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub rating: Option<i16>,
    pub is_favorite: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable recipe row.
///
/// `rating`, `is_favorite`, and `created_at` take their column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow {
    pub user_id: String,
    pub mood_id: Option<i32>,
    pub name: String,
    pub description: String,
}

/// Insertable recipe-ingredient junction row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredientRow {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub amount: String,
}

/// Database row for an ordered recipe step.
#[derive(Debug, Clone, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::recipe_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeStepRow {
    pub recipe_id: i32,
    pub step_number: i32,
    pub instruction: String,
}

/// Insertable recipe step row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::recipe_steps)]
pub struct NewRecipeStepRow {
    pub recipe_id: i32,
    pub step_number: i32,
    pub instruction: String,
}

/// Insertable recipe-equipment junction row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::recipe_equipment)]
pub struct NewRecipeEquipmentRow {
    pub recipe_id: i32,
    pub equipment_id: i32,
}

/// A validated recipe rating.
///
/// # Examples
///
/// ```
/// use muddler_database::Rating;
///
/// assert!(Rating::new(4).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating(i16);

impl Rating {
    /// Create a rating, rejecting values outside 1..=5.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseErrorKind::InvalidValue`] for out-of-range values.
    pub fn new(value: i16) -> Result<Self, DatabaseError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
                "Rating must be between 1 and 5, got {}",
                value
            ))))
        }
    }

    /// The validated value.
    pub fn value(&self) -> i16 {
        self.0
    }
}
