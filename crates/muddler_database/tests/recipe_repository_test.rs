//! Integration tests for recipe persistence.
//!
//! Requires `DATABASE_URL`; run with `--features pg`.

mod common;

use diesel::prelude::*;
use muddler_core::{GeneratedIngredient, GeneratedRecipe, MatchedIngredient, RecipeMatches};
use muddler_database::{
    PostgresRecipeRepository, Rating, RecipeRepository, schema,
};
use muddler_error::DatabaseErrorKind;

fn sunrise() -> GeneratedRecipe {
    GeneratedRecipe {
        name: "Sunrise".to_string(),
        description: "A bright, happy shake.".to_string(),
        ingredients: vec![
            GeneratedIngredient {
                name: "Vodka".to_string(),
                amount: "50 ml".to_string(),
            },
            GeneratedIngredient {
                name: "Fresh Lime".to_string(),
                amount: "20 ml".to_string(),
            },
        ],
        steps: vec![
            "Fill the shaker with ice.".to_string(),
            "Add vodka and lime.".to_string(),
            "Shake and strain.".to_string(),
        ],
        equipment_used: vec!["Shaker".to_string()],
    }
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn persists_matched_relations_atomically() {
    let mut conn = common::connect();
    let (equipment, ingredients, moods) = common::seed_catalog(&mut conn);

    // Reconciliation already dropped "Fresh Lime"; only Vodka and the Shaker
    // survive into the junctions.
    let matches = RecipeMatches {
        ingredients: vec![MatchedIngredient {
            ingredient_id: ingredients[0].id,
            amount: "50 ml".to_string(),
        }],
        equipment_ids: vec![equipment[0].id],
    };

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    let recipe_id = repo
        .persist_recipe(&sunrise(), &matches, Some(moods[0].id), "user-e2e")
        .expect("persist should succeed");

    let ingredient_count: i64 = schema::recipe_ingredients::table
        .filter(schema::recipe_ingredients::recipe_id.eq(recipe_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(ingredient_count, 1);

    let step_numbers: Vec<i32> = schema::recipe_steps::table
        .filter(schema::recipe_steps::recipe_id.eq(recipe_id))
        .order(schema::recipe_steps::step_number.asc())
        .select(schema::recipe_steps::step_number)
        .load(&mut conn)
        .unwrap();
    assert_eq!(step_numbers, vec![1, 2, 3]);

    let equipment_count: i64 = schema::recipe_equipment::table
        .filter(schema::recipe_equipment::recipe_id.eq(recipe_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(equipment_count, 1);

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    repo.delete_recipe(recipe_id).unwrap();
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn failed_transaction_leaves_no_rows() {
    let mut conn = common::connect();
    let (_, ingredients, moods) = common::seed_catalog(&mut conn);

    // The equipment junction is the last insert group; a foreign-key
    // violation there must roll back the recipe, ingredient, and step rows
    // that were already staged.
    let matches = RecipeMatches {
        ingredients: vec![MatchedIngredient {
            ingredient_id: ingredients[0].id,
            amount: "50 ml".to_string(),
        }],
        equipment_ids: vec![i32::MAX],
    };

    let recipe = GeneratedRecipe {
        name: "Atomicity Probe".to_string(),
        ..sunrise()
    };

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    let result = repo.persist_recipe(&recipe, &matches, Some(moods[0].id), "user-atomic");
    assert!(result.is_err());

    let visible: i64 = schema::recipes::table
        .filter(schema::recipes::name.eq("Atomicity Probe"))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(visible, 0);

    let orphan_steps: i64 = schema::recipe_steps::table
        .inner_join(schema::recipes::table)
        .filter(schema::recipes::name.eq("Atomicity Probe"))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(orphan_steps, 0);
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn rating_and_favorite_update_existing_recipe() {
    let mut conn = common::connect();
    let (_, ingredients, _) = common::seed_catalog(&mut conn);

    let matches = RecipeMatches {
        ingredients: vec![MatchedIngredient {
            ingredient_id: ingredients[0].id,
            amount: "50 ml".to_string(),
        }],
        equipment_ids: vec![],
    };

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    let recipe_id = repo
        .persist_recipe(&sunrise(), &matches, None, "user-rating")
        .unwrap();

    repo.set_rating(recipe_id, Rating::new(4).unwrap()).unwrap();
    repo.set_favorite(recipe_id, true).unwrap();

    let row = repo.get_recipe(recipe_id).unwrap().unwrap();
    assert_eq!(row.rating, Some(4));
    assert!(row.is_favorite);

    repo.delete_recipe(recipe_id).unwrap();
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn updates_on_missing_recipe_report_not_found() {
    let mut conn = common::connect();

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    let err = repo.set_favorite(i32::MAX, true).unwrap_err();
    assert_eq!(err.kind, DatabaseErrorKind::NotFound);
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn delete_cascades_to_owned_relations() {
    let mut conn = common::connect();
    let (equipment, ingredients, _) = common::seed_catalog(&mut conn);

    let matches = RecipeMatches {
        ingredients: vec![MatchedIngredient {
            ingredient_id: ingredients[1].id,
            amount: "20 ml".to_string(),
        }],
        equipment_ids: vec![equipment[1].id],
    };

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    let recipe_id = repo
        .persist_recipe(&sunrise(), &matches, None, "user-cascade")
        .unwrap();
    repo.delete_recipe(recipe_id).unwrap();

    let leftovers: i64 = schema::recipe_steps::table
        .filter(schema::recipe_steps::recipe_id.eq(recipe_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(leftovers, 0);

    let junctions: i64 = schema::recipe_ingredients::table
        .filter(schema::recipe_ingredients::recipe_id.eq(recipe_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(junctions, 0);
}
