pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod source;
pub mod store;
pub mod theme;

use log::debug;

pub use crate::catalog::{build_index, filter_recipes, validate};
pub use crate::error::{CatalogError, IntegrityError};
pub use crate::i18n::{ui_text, Language, UiText};
pub use crate::model::{Category, Ingredient, Recipe, Tag, TagFilter};
pub use crate::source::{HttpSource, RecipeSource};
pub use crate::store::{CatalogStore, CatalogStoreBuilder, LoadTicket, SelectionState};
pub use crate::theme::Theme;

/// Fetches and validates the recipe list for one language.
///
/// This is the load path the store uses; it is exposed for consumers that
/// want the validated list without the state coordination.
pub async fn load_recipes(
    source: &dyn RecipeSource,
    language: Language,
) -> Result<Vec<Recipe>, CatalogError> {
    let recipes = source.fetch(language).await?;
    validate(&recipes)?;
    debug!("validated {} recipes for {language}", recipes.len());

    Ok(recipes)
}
