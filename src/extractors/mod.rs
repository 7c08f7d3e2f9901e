use scraper::Html;
use serde_json::Value;

mod json_ld;

pub use self::json_ld::{JsonLdExtractor, RECIPE_TYPE};

/// Result of scanning one document for recipe-typed structured data.
///
/// The block counters make silently skipped islands observable, so batch
/// tooling can report "N of M structured-data blocks were unparsable"
/// without failing the import.
#[derive(Debug, Default)]
pub struct SchemaDiscovery {
    /// Recipe-typed schema objects in discovery order.
    pub candidates: Vec<Value>,
    pub blocks_seen: usize,
    pub blocks_skipped: usize,
}

pub trait SchemaExtractor {
    fn discover(&self, document: &Html) -> SchemaDiscovery;
}
