use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// `recipeYield` as published: a count, a descriptive string, or a list
/// of either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YieldField {
    Count(f64),
    Text(String),
    Many(Vec<Value>),
    Other(Value),
}

/// Extract a serving count from the yield field. The first run of digits
/// wins ("6 to 8 portions" is 6); anything unparsable is 1.
pub fn parse_servings(field: Option<YieldField>) -> u32 {
    match field {
        Some(YieldField::Count(count)) => digits_of(&count.to_string()),
        Some(YieldField::Text(text)) => digits_of(&text),
        Some(YieldField::Many(entries)) => match entries.into_iter().next() {
            Some(Value::String(text)) => digits_of(&text),
            Some(Value::Number(count)) => digits_of(&count.to_string()),
            _ => 1,
        },
        Some(YieldField::Other(_)) | None => 1,
    }
}

fn digits_of(text: &str) -> u32 {
    DIGITS_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(1)
        .max(1)
}
