use std::time::Duration;

use crate::config::ImportConfig;
use crate::fetcher::PageFetcher;
use crate::model::ExtractedRecipe;
use crate::{extract_recipes_from_page, ImportError};

/// Builder for configuring and executing recipe imports
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    url: Option<String>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeImporterBuilder {
    /// Set the URL of the recipe page to import
    ///
    /// # Example
    /// ```
    /// use recipe_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the connection timeout for the page fetch
    ///
    /// # Example
    /// ```
    /// use recipe_import::RecipeImporter;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .connect_timeout(Duration::from_secs(5));
    /// ```
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set the User-Agent header sent with the page fetch
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Fetch the page and extract every recipe it declares
    ///
    /// Settings not given on the builder fall back to the loaded
    /// [`ImportConfig`], then to built-in defaults.
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No URL was specified
    /// - The URL is invalid or has a non-http(s) scheme
    /// - The page fetch fails
    ///
    /// A page without recipe structured data is not an error: the result
    /// is an empty list.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_import::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipes = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .import()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn import(self) -> Result<Vec<ExtractedRecipe>, ImportError> {
        let url = self.url.ok_or_else(|| {
            ImportError::BuilderError("No URL specified. Use .url()".to_string())
        })?;

        let config = ImportConfig::load()?;
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(config.connect_timeout));
        let user_agent = self.user_agent.unwrap_or(config.user_agent);

        let fetcher = PageFetcher::new(Some(connect_timeout), Some(&user_agent));
        let page = fetcher.fetch(&url).await?;
        Ok(extract_recipes_from_page(&page))
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use recipe_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
