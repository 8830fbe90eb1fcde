use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use log::{debug, warn};

use crate::catalog::{build_index, matching_indices, validate};
use crate::error::CatalogError;
use crate::i18n::Language;
use crate::model::{Category, Ingredient, Recipe, TagFilter};
use crate::source::RecipeSource;
use crate::theme::{self, Theme};

/// Ingredient, tag and detail-view choices made by the user.
///
/// Ingredient and tag selections survive both recipe-detail navigation and
/// a language switch - keys are language-independent identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_ingredients: BTreeSet<String>,
    pub selected_tag: TagFilter,
    pub selected_recipe: Option<String>,
}

/// Ticket handed out by [`CatalogStore::begin_load`]. A result presented
/// with a superseded ticket is discarded, so a slow response for an old
/// language switch can never clobber a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    language: Language,
}

#[derive(Default)]
struct FilterCache {
    key: Option<(u64, TagFilter, BTreeSet<String>)>,
    indices: Vec<usize>,
}

#[derive(Default)]
struct IndexCache {
    key: Option<(u64, Language)>,
    index: BTreeMap<Category, Vec<Ingredient>>,
}

/// Single owner of the catalog state: the raw recipe list for the active
/// language, the load lifecycle, the selection state, and the theme.
/// Derived views are memoized pure functions of that state.
pub struct CatalogStore {
    source: Box<dyn RecipeSource>,
    language: Language,
    theme: Theme,
    theme_path: Option<PathBuf>,
    recipes: Vec<Recipe>,
    loading: bool,
    error: Option<CatalogError>,
    selection: SelectionState,
    generation: u64,
    revision: u64,
    filter_cache: FilterCache,
    index_cache: IndexCache,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("language", &self.language)
            .field("theme", &self.theme)
            .field("theme_path", &self.theme_path)
            .field("recipes", &self.recipes)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("selection", &self.selection)
            .field("generation", &self.generation)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`CatalogStore`]
#[derive(Default)]
pub struct CatalogStoreBuilder {
    source: Option<Box<dyn RecipeSource>>,
    language: Option<Language>,
    theme_path: Option<PathBuf>,
}

impl CatalogStoreBuilder {
    /// Set the recipe source the store loads from (required)
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Set the language active at startup
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Persist the theme preference to `path`; the stored value is read
    /// back immediately, falling back to dark
    pub fn theme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<CatalogStore, CatalogError> {
        let source = self.source.ok_or_else(|| {
            CatalogError::Builder("no recipe source configured. Use .source()".to_string())
        })?;
        let theme = self
            .theme_path
            .as_deref()
            .map(theme::load_theme)
            .unwrap_or_default();

        Ok(CatalogStore {
            source,
            language: self.language.unwrap_or(Language::Cn),
            theme,
            theme_path: self.theme_path,
            recipes: Vec::new(),
            loading: false,
            error: None,
            selection: SelectionState::default(),
            generation: 0,
            revision: 0,
            filter_cache: FilterCache::default(),
            index_cache: IndexCache::default(),
        })
    }
}

impl CatalogStore {
    pub fn builder() -> CatalogStoreBuilder {
        CatalogStoreBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    /// The raw recipe list for the active language, in document order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Switches the catalog to `language`: fetch, validate, replace.
    ///
    /// On any failure the catalog is cleared and only the error remains -
    /// stale data from the previous language is never left on display.
    pub async fn select_language(&mut self, language: Language) {
        let ticket = self.begin_load(language);
        let result = self.source.fetch(language).await;
        self.finish_load(ticket, result);
    }

    /// Marks a load as in flight and returns the ticket that the matching
    /// [`finish_load`](Self::finish_load) call must present.
    pub fn begin_load(&mut self, language: Language) -> LoadTicket {
        self.language = language;
        self.loading = true;
        self.error = None;
        self.generation += 1;

        LoadTicket {
            generation: self.generation,
            language,
        }
    }

    /// Applies a finished fetch. Results carrying a superseded ticket are
    /// dropped; otherwise the set is validated and replaces the catalog
    /// atomically.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Recipe>, CatalogError>) {
        if ticket.generation != self.generation {
            debug!("discarding stale recipe load for {}", ticket.language);
            return;
        }

        self.loading = false;
        self.revision += 1;

        let validated = result.and_then(|recipes| {
            validate(&recipes)?;
            Ok(recipes)
        });

        match validated {
            Ok(recipes) => {
                debug!("loaded {} recipes for {}", recipes.len(), ticket.language);
                self.recipes = recipes;
                self.error = None;
            }
            Err(err) => {
                warn!("recipe load for {} failed: {err}", ticket.language);
                self.recipes.clear();
                self.error = Some(err);
            }
        }
    }

    pub fn select_recipe(&mut self, id: impl Into<String>) {
        self.selection.selected_recipe = Some(id.into());
    }

    /// The "back" action: leaves the detail view, keeps the filters.
    pub fn clear_selection(&mut self) {
        self.selection.selected_recipe = None;
    }

    /// The recipe open in the detail view, if its id still exists in the
    /// current catalog.
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let id = self.selection.selected_recipe.as_deref()?;
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Symmetric add/remove of one ingredient key.
    pub fn toggle_ingredient(&mut self, key: &str) {
        if !self.selection.selected_ingredients.remove(key) {
            self.selection.selected_ingredients.insert(key.to_string());
        }
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        self.selection.selected_tag = tag;
    }

    /// Flips light/dark and persists the preference. Persistence failure
    /// is logged and swallowed - it never becomes a catalog error.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Some(path) = &self.theme_path {
            if let Err(err) = theme::store_theme(path, self.theme) {
                warn!("failed to persist theme preference: {err}");
            }
        }
    }

    /// Recipes passing the active tag and ingredient filters, in catalog
    /// order. Memoized on (recipe set, tag, selection).
    pub fn filtered_recipes(&mut self) -> Vec<&Recipe> {
        let key = (
            self.revision,
            self.selection.selected_tag,
            self.selection.selected_ingredients.clone(),
        );
        if self.filter_cache.key.as_ref() != Some(&key) {
            self.filter_cache.indices = matching_indices(&self.recipes, key.1, &key.2);
            self.filter_cache.key = Some(key);
        }

        self.filter_cache
            .indices
            .iter()
            .map(|&i| &self.recipes[i])
            .collect()
    }

    /// The deduplicated, category-grouped, locale-sorted ingredient index.
    /// Memoized on (recipe set, language).
    pub fn ingredient_index(&mut self) -> &BTreeMap<Category, Vec<Ingredient>> {
        let key = (self.revision, self.language);
        if self.index_cache.key != Some(key) {
            self.index_cache.index = build_index(&self.recipes, self.language);
            self.index_cache.key = Some(key);
        }

        &self.index_cache.index
    }
}
