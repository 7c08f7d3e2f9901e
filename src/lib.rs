//! Recipe-page extraction engine for the recipe manager's URL import.
//!
//! Given the URL of a public recipe page, fetches the page, discovers
//! every recipe-typed object in its embedded structured data, and
//! normalizes each into an [`ExtractedRecipe`] ready for persistence.

pub mod assembler;
mod builder;
pub mod config;
pub mod error;
pub mod extractors;
mod fetcher;
pub mod model;
pub mod normalize;
mod selectors;

use std::time::Duration;

use log::debug;
use scraper::Html;

use crate::extractors::{JsonLdExtractor, SchemaExtractor};

pub use crate::builder::{RecipeImporter, RecipeImporterBuilder};
pub use crate::error::ImportError;
pub use crate::fetcher::{PageFetcher, RawPage, DEFAULT_CONNECT_TIMEOUT};
pub use crate::model::{
    Direction, Equipment, ExtractedRecipe, Ingredient, Nutrition, Recipe,
};

/// Fetch a recipe page and extract every recipe it declares, in
/// discovery order.
///
/// A page without recipe structured data yields an empty list, which is
/// distinct from a failed fetch or an invalid URL (both are errors).
pub async fn extract_recipes_from_url(url: &str) -> Result<Vec<ExtractedRecipe>, ImportError> {
    extract_recipes_from_url_with_timeout(url, None).await
}

/// Like [`extract_recipes_from_url`] with an explicit connection timeout.
pub async fn extract_recipes_from_url_with_timeout(
    url: &str,
    connect_timeout: Option<Duration>,
) -> Result<Vec<ExtractedRecipe>, ImportError> {
    let fetcher = PageFetcher::new(connect_timeout, None);
    let page = fetcher.fetch(url).await?;
    Ok(extract_recipes_from_page(&page))
}

/// Extract recipes from an already fetched page.
///
/// Provisional ids are current epoch milliseconds plus the running count,
/// so they stay unique and monotonic within one extraction call.
pub fn extract_recipes_from_page(page: &RawPage) -> Vec<ExtractedRecipe> {
    let document = Html::parse_document(&page.body);
    let discovery = JsonLdExtractor.discover(&document);
    debug!(
        "{}: {} recipe candidates",
        page.url,
        discovery.candidates.len()
    );

    let base_id = chrono::Utc::now().timestamp_millis();
    discovery
        .candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            assembler::assemble_recipe(candidate, &document, base_id + index as i64)
        })
        .collect()
}
