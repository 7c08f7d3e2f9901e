//! Field normalizers for raw schema values.
//!
//! Recipe structured data in the wild is loosely typed: the same field may
//! arrive as a string, a number, an array, an object, or not at all. Each
//! normalizer here is a total function over the shapes actually observed,
//! degrading to a documented default instead of failing.

mod duration;
mod image;
mod ingredient;
mod instructions;
mod nutrition;
mod servings;

pub use duration::parse_iso_minutes;
pub use image::{resolve_image, ImageEntry, ImageField, ImageObject};
pub use ingredient::{parse_ingredient_line, IngredientEntry, ParsedIngredient};
pub use instructions::{flatten_instructions, HowToNode, InstructionNode, InstructionsField};
pub use nutrition::{parse_nutrition, NutritionFacts, NutritionField};
pub use servings::{parse_servings, YieldField};

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

static LEADING_FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("valid regex")
});

/// Parse the leading float of a string, the way JavaScript's `parseFloat`
/// does. `"240 kcal"` is 240, `"2-3"` is 2, `"abc"` is nothing.
pub(crate) fn leading_float(text: &str) -> Option<f64> {
    LEADING_FLOAT_RE
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// A numeric schema value that may be written as a JSON number or a string
/// with trailing units.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
    Other(Value),
}

impl NumberOrText {
    pub fn to_f64(&self) -> f64 {
        match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(text) => leading_float(text).unwrap_or(0.0),
            NumberOrText::Other(_) => 0.0,
        }
    }
}

/// `recipeCategory` as published: a single string or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    One(String),
    Many(Vec<String>),
    Other(Value),
}

const DEFAULT_CATEGORY: &str = "Uncategorized";

pub fn parse_category(field: Option<CategoryField>) -> String {
    let joined = match field {
        Some(CategoryField::One(category)) => category,
        Some(CategoryField::Many(categories)) => categories.join(", "),
        Some(CategoryField::Other(_)) | None => String::new(),
    };
    if joined.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        decode_text(&joined)
    }
}

/// The `aggregateRating` object; only `ratingValue` is consumed.
#[derive(Debug, Deserialize)]
pub struct RatingField {
    #[serde(rename = "ratingValue")]
    pub rating_value: Option<NumberOrText>,
}

pub fn parse_rating(field: Option<RatingField>) -> f64 {
    field
        .and_then(|rating| rating.rating_value)
        .map(|value| value.to_f64())
        .unwrap_or(0.0)
}

/// Decode HTML entities in display text. Sites routinely double-encode
/// entities in their embedded JSON, so decode twice.
pub(crate) fn decode_text(text: &str) -> String {
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float_takes_numeric_prefix() {
        assert_eq!(leading_float("240 kcal"), Some(240.0));
        assert_eq!(leading_float("4.5 stars"), Some(4.5));
        assert_eq!(leading_float("  2-3"), Some(2.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("-1.5g"), Some(-1.5));
        assert_eq!(leading_float("kcal 240"), None);
        assert_eq!(leading_float(""), None);
    }

    #[test]
    fn category_joins_lists() {
        let field: Option<CategoryField> =
            serde_json::from_value(serde_json::json!(["Dinner", "Italian"])).ok();
        assert_eq!(parse_category(field), "Dinner, Italian");
    }

    #[test]
    fn category_accepts_single_string() {
        let field: Option<CategoryField> = serde_json::from_value(serde_json::json!("Dessert")).ok();
        assert_eq!(parse_category(field), "Dessert");
    }

    #[test]
    fn category_defaults_when_absent_or_empty() {
        assert_eq!(parse_category(None), "Uncategorized");
        let empty: Option<CategoryField> = serde_json::from_value(serde_json::json!([])).ok();
        assert_eq!(parse_category(empty), "Uncategorized");
    }

    #[test]
    fn rating_parses_string_values() {
        let field: Option<RatingField> =
            serde_json::from_value(serde_json::json!({"ratingValue": "4.7"})).ok();
        assert_eq!(parse_rating(field), 4.7);
    }

    #[test]
    fn rating_defaults_to_zero() {
        assert_eq!(parse_rating(None), 0.0);
        let field: Option<RatingField> =
            serde_json::from_value(serde_json::json!({"ratingValue": "unrated"})).ok();
        assert_eq!(parse_rating(field), 0.0);
    }

    #[test]
    fn decode_text_handles_double_encoded_entities() {
        assert_eq!(decode_text("Mac &amp;amp; Cheese"), "Mac & Cheese");
        assert_eq!(decode_text("Shepherd&#39;s Pie"), "Shepherd's Pie");
    }
}
