//! Shared helpers for database integration tests.
//!
//! Requires `DATABASE_URL`; run with `--features pg`.

use diesel::pg::PgConnection;
use muddler_database::{
    EquipmentRow, IngredientRow, MoodRow, NewEquipmentRow, NewIngredientRow, NewMoodRow,
    establish_connection, run_migrations, seed_equipment, seed_ingredients, seed_moods,
};

/// Connect and apply migrations.
pub fn connect() -> PgConnection {
    let _ = dotenvy::dotenv();
    let mut conn = establish_connection().expect("DATABASE_URL must be set for tests");
    run_migrations(&mut conn).expect("migrations should apply");
    conn
}

/// Seed the standard test catalog: Shaker/Jigger, Vodka/Lime Juice, Happy.
pub fn seed_catalog(conn: &mut PgConnection) -> (Vec<EquipmentRow>, Vec<IngredientRow>, Vec<MoodRow>) {
    let equipment = seed_equipment(
        conn,
        &[
            NewEquipmentRow {
                category: "shaking".to_string(),
                name: "Shaker".to_string(),
                icon: Some("shaker".to_string()),
            },
            NewEquipmentRow {
                category: "measuring".to_string(),
                name: "Jigger".to_string(),
                icon: None,
            },
        ],
    )
    .expect("equipment seeds");

    let ingredients = seed_ingredients(
        conn,
        &[
            NewIngredientRow {
                category: "spirit".to_string(),
                name: "Vodka".to_string(),
                icon: None,
            },
            NewIngredientRow {
                category: "juice".to_string(),
                name: "Lime Juice".to_string(),
                icon: None,
            },
        ],
    )
    .expect("ingredient seeds");

    let moods = seed_moods(
        conn,
        &[NewMoodRow {
            name: "Happy".to_string(),
            description: "Bright, celebratory drinks".to_string(),
            examples: "Mojito, Margarita".to_string(),
        }],
    )
    .expect("mood seeds");

    (equipment, ingredients, moods)
}
