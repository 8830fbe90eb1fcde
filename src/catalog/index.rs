use std::collections::{BTreeMap, HashSet};

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};

use crate::i18n::Language;
use crate::model::{Category, Ingredient, Recipe};

/// Builds the deduplicated, category-grouped ingredient index.
///
/// The first occurrence of each key is retained in full - later
/// occurrences, including ones with a different name or amount, are
/// dropped. Groups are keyed by category (absent when empty, never
/// present-but-empty) and sorted by display name under the collation
/// rules of `language`. The sort is stable, so equal names keep their
/// insertion order.
pub fn build_index(
    recipes: &[Recipe],
    language: Language,
) -> BTreeMap<Category, Vec<Ingredient>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut groups: BTreeMap<Category, Vec<Ingredient>> = BTreeMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if seen.insert(&ingredient.key) {
                groups
                    .entry(ingredient.category)
                    .or_default()
                    .push(ingredient.clone());
            }
        }
    }

    let collator = collator_for(language);
    for ingredients in groups.values_mut() {
        ingredients.sort_by(|a, b| collator.compare(&a.name, &b.name));
    }

    groups
}

fn collator_for(language: Language) -> CollatorBorrowed<'static> {
    Collator::try_new(
        language.collation_locale().into(),
        CollatorOptions::default(),
    )
    .expect("Failed to create collator")
}
