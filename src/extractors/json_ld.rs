use std::collections::VecDeque;

use log::{debug, warn};
use scraper::Html;
use serde_json::Value;

use super::{SchemaDiscovery, SchemaExtractor};
use crate::selectors::LD_JSON_SELECTOR;

/// Type tag the importer matches on. A candidate qualifies when its
/// `@type` is this string or an array containing it.
pub const RECIPE_TYPE: &str = "recipes";

pub struct JsonLdExtractor;

impl SchemaExtractor for JsonLdExtractor {
    fn discover(&self, document: &Html) -> SchemaDiscovery {
        let mut discovery = SchemaDiscovery::default();

        for script in document.select(&LD_JSON_SELECTOR) {
            discovery.blocks_seen += 1;

            let cleaned = sanitize_json(&script.inner_html());
            match serde_json::from_str::<Value>(&cleaned) {
                Ok(block) => {
                    for candidate in typed_objects(&block) {
                        if is_recipe_type(candidate) {
                            discovery.candidates.push(candidate.clone());
                        }
                    }
                }
                Err(err) => {
                    // Malformed embedded data must not abort the other
                    // blocks on the same page.
                    discovery.blocks_skipped += 1;
                    debug!("Skipping malformed structured-data block: {}", err);
                }
            }
        }

        if discovery.blocks_skipped > 0 {
            warn!(
                "{} of {} structured-data blocks were unparsable",
                discovery.blocks_skipped, discovery.blocks_seen
            );
        }
        debug!(
            "Discovered {} recipe-typed schema objects in {} blocks",
            discovery.candidates.len(),
            discovery.blocks_seen
        );

        discovery
    }
}

/// Breadth-first worklist over a parsed block: every object carrying an
/// `@type` is a candidate, and every object or array reachable from the
/// root is traversed, so recipes inside `@graph` wrappers, lists, or
/// sibling schemas are found at any depth.
fn typed_objects(root: &Value) -> Vec<&Value> {
    let mut found = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(value) = queue.pop_front() {
        match value {
            Value::Object(map) => {
                if map.contains_key("@type") {
                    found.push(value);
                }
                for child in map.values() {
                    if child.is_object() || child.is_array() {
                        queue.push_back(child);
                    }
                }
            }
            Value::Array(items) => {
                for child in items {
                    if child.is_object() || child.is_array() {
                        queue.push_back(child);
                    }
                }
            }
            _ => {}
        }
    }

    found
}

fn is_recipe_type(candidate: &Value) -> bool {
    match candidate.get("@type") {
        Some(Value::String(tag)) => tag == RECIPE_TYPE,
        Some(Value::Array(tags)) => tags.iter().any(|tag| tag.as_str() == Some(RECIPE_TYPE)),
        _ => false,
    }
}

/// Clean a structured-data island before parsing. Some sites wrap their
/// JSON in comment markers or leave trailing commas behind a template.
fn sanitize_json(raw: &str) -> String {
    let mut cleaned = raw.trim().to_string();

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    cleaned = cleaned.replace(",]", "]").replace(",}", "}");
    cleaned = cleaned.replace("<!--", "").replace("-->", "");

    cleaned
}
