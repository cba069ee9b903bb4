//! Repository for catalog reads.

use crate::{DatabaseResult, EquipmentRow, IngredientRow, MoodRow};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use muddler_core::{EquipmentItem, IngredientItem, Mood};
use muddler_error::DatabaseError;

/// Read access to the closed equipment/ingredient/mood catalog.
///
/// The catalog is read-only reference data for the pipeline; rows are
/// created only by seeding (see [`crate::seed_equipment`] and friends).
pub trait CatalogRepository {
    /// Fetch the equipment entries for an ID set, in ID order.
    ///
    /// IDs with no catalog row are simply absent from the result.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails or a row carries an unknown
    /// category.
    fn fetch_equipment_by_ids(&mut self, ids: &[i32]) -> DatabaseResult<Vec<EquipmentItem>>;

    /// Fetch the ingredient entries for an ID set, in ID order.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails or a row carries an unknown
    /// category.
    fn fetch_ingredients_by_ids(&mut self, ids: &[i32]) -> DatabaseResult<Vec<IngredientItem>>;

    /// Fetch a mood by ID.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails.
    fn fetch_mood_by_id(&mut self, id: i32) -> DatabaseResult<Option<Mood>>;

    /// List the full equipment catalog in ID order.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails.
    fn list_equipment(&mut self) -> DatabaseResult<Vec<EquipmentItem>>;

    /// List the full ingredient catalog in ID order.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails.
    fn list_ingredients(&mut self) -> DatabaseResult<Vec<IngredientItem>>;

    /// List all moods in ID order.
    ///
    /// # Errors
    /// Returns DatabaseError if the query fails.
    fn list_moods(&mut self) -> DatabaseResult<Vec<Mood>>;
}

/// PostgreSQL implementation of CatalogRepository.
pub struct PostgresCatalogRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresCatalogRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl<'a> CatalogRepository for PostgresCatalogRepository<'a> {
    fn fetch_equipment_by_ids(&mut self, ids: &[i32]) -> DatabaseResult<Vec<EquipmentItem>> {
        use crate::schema::equipment::dsl;

        let rows: Vec<EquipmentRow> = dsl::equipment
            .filter(dsl::id.eq_any(ids))
            .order(dsl::id.asc())
            .load(self.conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter().map(EquipmentItem::try_from).collect()
    }

    fn fetch_ingredients_by_ids(&mut self, ids: &[i32]) -> DatabaseResult<Vec<IngredientItem>> {
        use crate::schema::ingredients::dsl;

        let rows: Vec<IngredientRow> = dsl::ingredients
            .filter(dsl::id.eq_any(ids))
            .order(dsl::id.asc())
            .load(self.conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter().map(IngredientItem::try_from).collect()
    }

    fn fetch_mood_by_id(&mut self, id: i32) -> DatabaseResult<Option<Mood>> {
        use crate::schema::moods::dsl;

        let row: Option<MoodRow> = dsl::moods
            .find(id)
            .first(self.conn)
            .optional()
            .map_err(DatabaseError::from)?;

        Ok(row.map(Mood::from))
    }

    fn list_equipment(&mut self) -> DatabaseResult<Vec<EquipmentItem>> {
        use crate::schema::equipment::dsl;

        let rows: Vec<EquipmentRow> = dsl::equipment
            .order(dsl::id.asc())
            .load(self.conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter().map(EquipmentItem::try_from).collect()
    }

    fn list_ingredients(&mut self) -> DatabaseResult<Vec<IngredientItem>> {
        use crate::schema::ingredients::dsl;

        let rows: Vec<IngredientRow> = dsl::ingredients
            .order(dsl::id.asc())
            .load(self.conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter().map(IngredientItem::try_from).collect()
    }

    fn list_moods(&mut self) -> DatabaseResult<Vec<Mood>> {
        use crate::schema::moods::dsl;

        let rows: Vec<MoodRow> = dsl::moods
            .order(dsl::id.asc())
            .load(self.conn)
            .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(Mood::from).collect())
    }
}
