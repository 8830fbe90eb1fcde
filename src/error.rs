use thiserror::Error;

use crate::model::Category;

/// Errors that can occur while loading a recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to fetch the recipe document for a language
    #[error("failed to fetch recipe data: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Response body was not a valid recipe document
    #[error("failed to parse recipe data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Recipes disagree on the category of a shared ingredient key
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Store builder misconfiguration
    #[error("builder error: {0}")]
    Builder(String),
}

/// Cross-recipe conflict: one ingredient key claimed by two categories.
///
/// Carries enough detail to locate the offending record; the message is
/// developer-facing and intentionally not localized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "ingredient \"{key}\" is categorized as \"{found}\" in recipe \"{recipe_title}\" \
     but was first seen as \"{expected}\""
)]
pub struct IntegrityError {
    pub key: String,
    pub expected: Category,
    pub found: Category,
    pub recipe_title: String,
}
