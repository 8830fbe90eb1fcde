use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::CatalogError;
use crate::i18n::Language;
use crate::model::Recipe;

/// A source of localized recipe documents.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the full recipe list for one language.
    async fn fetch(&self, language: Language) -> Result<Vec<Recipe>, CatalogError>;
}

/// Fetches `{base_url}/{lang}.json` over HTTP.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("recipe-catalog/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecipeSource for HttpSource {
    async fn fetch(&self, language: Language) -> Result<Vec<Recipe>, CatalogError> {
        let url = format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            language.code()
        );
        debug!("fetching recipe document from {url}");

        // Body is read as text and parsed separately so an HTTP failure and
        // a malformed document surface as distinct errors.
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let recipes: Vec<Recipe> = serde_json::from_str(&body)?;
        debug!("fetched {} recipes for {language}", recipes.len());

        Ok(recipes)
    }
}
