use scraper::Html;
use serde::Deserialize;
use serde_json::Value;

use crate::selectors::{IMG_SELECTOR, ITEMPROP_IMAGE_SELECTOR, OG_IMAGE_SELECTOR};

/// The `image` field as published: a bare URL, an `ImageObject`, or an
/// array of either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    Url(String),
    Object(ImageObject),
    Many(Vec<ImageEntry>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Url(String),
    Object(ImageObject),
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub struct ImageObject {
    pub url: String,
}

/// Resolve a title image for the recipe.
///
/// Prefers the structured `image` field; when that is absent or
/// unresolvable, falls back to the page itself: the social-preview meta
/// tag, then the first image marked as the item image, then the first
/// image element, then an empty string.
pub fn resolve_image(field: Option<ImageField>, document: &Html) -> String {
    let from_schema = match field {
        Some(ImageField::Url(url)) => Some(url),
        Some(ImageField::Object(image)) => Some(image.url),
        Some(ImageField::Many(entries)) => entries.into_iter().next().and_then(|entry| match entry {
            ImageEntry::Url(url) => Some(url),
            ImageEntry::Object(image) => Some(image.url),
            ImageEntry::Other(_) => None,
        }),
        Some(ImageField::Other(_)) | None => None,
    };

    from_schema
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| page_fallback_image(document))
}

fn page_fallback_image(document: &Html) -> String {
    document
        .select(&OG_IMAGE_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .or_else(|| {
            document
                .select(&ITEMPROP_IMAGE_SELECTOR)
                .next()
                .and_then(|element| element.value().attr("src"))
        })
        .or_else(|| {
            document
                .select(&IMG_SELECTOR)
                .next()
                .and_then(|element| element.value().attr("src"))
        })
        .unwrap_or_default()
        .to_string()
}
