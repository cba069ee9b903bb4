//! Integration tests for batch assembly.
//!
//! Requires `DATABASE_URL`; run with `--features pg`.

mod common;

use muddler_core::{GeneratedIngredient, GeneratedRecipe, MatchedIngredient, RecipeMatches};
use muddler_database::{
    PostgresRecipeRepository, RecipeRepository, assemble_recipe, assemble_recipes,
};

fn recipe(name: &str, steps: usize) -> GeneratedRecipe {
    GeneratedRecipe {
        name: name.to_string(),
        description: format!("{} description", name),
        ingredients: vec![GeneratedIngredient {
            name: "Vodka".to_string(),
            amount: "50 ml".to_string(),
        }],
        steps: (1..=steps).map(|n| format!("Step {}.", n)).collect(),
        equipment_used: vec!["Shaker".to_string()],
    }
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn batch_assembly_preserves_order_and_hydrates_relations() {
    let mut conn = common::connect();
    let (equipment, ingredients, moods) = common::seed_catalog(&mut conn);

    let matches = RecipeMatches {
        ingredients: vec![MatchedIngredient {
            ingredient_id: ingredients[0].id,
            amount: "50 ml".to_string(),
        }],
        equipment_ids: vec![equipment[0].id],
    };

    let mut ids = Vec::new();
    {
        let mut repo = PostgresRecipeRepository::new(&mut conn);
        for (name, mood_id) in [
            ("Batch One", Some(moods[0].id)),
            ("Batch Two", None),
            ("Batch Three", Some(moods[0].id)),
        ] {
            let id = repo
                .persist_recipe(&recipe(name, 3), &matches, mood_id, "user-batch")
                .unwrap();
            ids.push(id);
        }
    }

    // Feed the rows in scrambled order; the views must come back the same way.
    let mut rows = Vec::new();
    {
        let mut repo = PostgresRecipeRepository::new(&mut conn);
        for &id in [ids[2], ids[0], ids[1]].iter() {
            rows.push(repo.get_recipe(id).unwrap().unwrap());
        }
    }

    let views = assemble_recipes(&mut conn, rows).unwrap();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].name, "Batch Three");
    assert_eq!(views[1].name, "Batch One");
    assert_eq!(views[2].name, "Batch Two");

    // Hydration: ingredient with amount, ordered steps, equipment, mood.
    assert_eq!(views[0].ingredients.len(), 1);
    assert_eq!(views[0].ingredients[0].ingredient.name, "Vodka");
    assert_eq!(views[0].ingredients[0].amount, "50 ml");
    assert_eq!(
        views[0].steps,
        vec!["Step 1.".to_string(), "Step 2.".to_string(), "Step 3.".to_string()]
    );
    assert_eq!(views[0].equipment[0].name, "Shaker");
    assert_eq!(views[0].mood.as_ref().map(|m| m.name.as_str()), Some("Happy"));

    // A recipe without a mood reference yields mood: None, not an error.
    assert!(views[2].mood.is_none());

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    for id in ids {
        repo.delete_recipe(id).unwrap();
    }
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn single_assembly_matches_batch_output() {
    let mut conn = common::connect();
    let (equipment, ingredients, moods) = common::seed_catalog(&mut conn);

    let matches = RecipeMatches {
        ingredients: vec![MatchedIngredient {
            ingredient_id: ingredients[1].id,
            amount: "20 ml".to_string(),
        }],
        equipment_ids: vec![equipment[1].id],
    };

    let id = {
        let mut repo = PostgresRecipeRepository::new(&mut conn);
        repo.persist_recipe(&recipe("Degenerate", 2), &matches, Some(moods[0].id), "user-single")
            .unwrap()
    };

    let row = {
        let mut repo = PostgresRecipeRepository::new(&mut conn);
        repo.get_recipe(id).unwrap().unwrap()
    };

    let single = assemble_recipe(&mut conn, row.clone()).unwrap();
    let batch = assemble_recipes(&mut conn, vec![row]).unwrap();
    assert_eq!(vec![single], batch);

    let mut repo = PostgresRecipeRepository::new(&mut conn);
    repo.delete_recipe(id).unwrap();
}

#[test]
#[cfg_attr(not(feature = "pg"), ignore)] // Requires DATABASE_URL
fn empty_input_returns_empty_output() {
    let mut conn = common::connect();
    let views = assemble_recipes(&mut conn, Vec::new()).unwrap();
    assert!(views.is_empty());
}
