use std::collections::HashMap;

use crate::error::IntegrityError;
use crate::model::{Category, Recipe};

/// Checks that every ingredient key maps to a single category across the
/// whole recipe set.
///
/// The first occurrence of a key fixes its category; the scan runs in
/// recipe order, then ingredient order within a recipe, and stops at the
/// first conflict. Must pass before any derived view is built - a failed
/// check fails the whole load.
pub fn validate(recipes: &[Recipe]) -> Result<(), IntegrityError> {
    let mut seen: HashMap<&str, Category> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            match seen.get(ingredient.key.as_str()) {
                None => {
                    seen.insert(&ingredient.key, ingredient.category);
                }
                Some(&expected) if expected != ingredient.category => {
                    return Err(IntegrityError {
                        key: ingredient.key.clone(),
                        expected,
                        found: ingredient.category,
                        recipe_title: recipe.title.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    Ok(())
}
