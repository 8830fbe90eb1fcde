use std::collections::{BTreeSet, HashSet};

use crate::model::{Recipe, TagFilter};

/// Applies the tag filter and the ingredient selection to the recipe list,
/// preserving catalog order.
///
/// Both stages are conjunctive: a recipe must carry the selected tag (or
/// the filter is `All`), and its own ingredient keys must contain *every*
/// selected key. An empty selection passes everything through the second
/// stage. An empty result is a valid "no matches" outcome.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    tag: TagFilter,
    selected: &BTreeSet<String>,
) -> Vec<&'a Recipe> {
    matching_indices(recipes, tag, selected)
        .into_iter()
        .map(|i| &recipes[i])
        .collect()
}

/// Positions of the matching recipes, in catalog order. Used by the store
/// so its cache does not have to hold borrows into its own recipe list.
pub(crate) fn matching_indices(
    recipes: &[Recipe],
    tag: TagFilter,
    selected: &BTreeSet<String>,
) -> Vec<usize> {
    recipes
        .iter()
        .enumerate()
        .filter(|(_, recipe)| matches(recipe, tag, selected))
        .map(|(i, _)| i)
        .collect()
}

fn matches(recipe: &Recipe, tag: TagFilter, selected: &BTreeSet<String>) -> bool {
    if !tag.matches(&recipe.tags) {
        return false;
    }
    if selected.is_empty() {
        return true;
    }
    let keys: HashSet<&str> = recipe.ingredients.iter().map(|i| i.key.as_str()).collect();
    selected.iter().all(|key| keys.contains(key.as_str()))
}
