use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::leading_float;

/// One tokenized ingredient line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
}

/// An entry of the `recipeIngredient` array. Non-string entries are kept
/// so one odd element cannot fail the whole array, and contribute nothing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IngredientEntry {
    Text(String),
    Other(Value),
}

// Quantity tokens cover digits, separators, range dashes, and the Unicode
// vulgar fraction glyphs.
const QUANTITY_CHARS: &str = r"0-9\s/.,\-–¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞";

static PAREN_ASIDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

// Optional quantity, then an optional letters-only unit. The unit must be
// followed by whitespace: a trailing letters token is the name, which is
// what keeps "2-3 eggs" as (2, "", "eggs").
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^([{QUANTITY_CHARS}]+)?\s*(?:([A-Za-z]+)\s+)?(.*)$"
    ))
    .expect("valid regex")
});

// "<name> - <quantity> <unit>" with a dash or colon separator and a
// digit-leading quantity clause.
static ALT_FORM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*[–\-:]\s*([0-9].*)$").expect("valid regex"));

static ALT_QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^([{QUANTITY_CHARS}]+)?\s*([A-Za-z]+)?")).expect("valid regex")
});

const FRACTION_GLYPHS: &[(char, f64)] = &[
    ('¼', 0.25),
    ('½', 0.5),
    ('¾', 0.75),
    ('⅐', 1.0 / 7.0),
    ('⅑', 1.0 / 9.0),
    ('⅒', 0.1),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Tokenize one free-text ingredient line into quantity, unit, and name.
///
/// Parenthesized asides are stripped first. The alternate
/// `"name - quantity unit"` ordering supersedes the primary
/// `"quantity unit name"` ordering when it matches.
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let cleaned = PAREN_ASIDE_RE.replace_all(line, "").trim().to_string();

    if let Some(parsed) = parse_alternate_form(&cleaned) {
        return parsed;
    }

    let caps = LINE_RE.captures(&cleaned);
    let raw_quantity = caps
        .as_ref()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or("1");
    let quantity = parse_quantity(first_range_bound(raw_quantity));
    let unit = caps
        .as_ref()
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let name = caps
        .as_ref()
        .and_then(|c| c.get(3))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(&cleaned)
        .to_string();

    ParsedIngredient {
        quantity,
        unit,
        name,
    }
}

fn parse_alternate_form(cleaned: &str) -> Option<ParsedIngredient> {
    let caps = ALT_FORM_RE.captures(cleaned)?;
    let name = caps.get(1)?.as_str().trim();
    // A purely numeric "name" is a quantity range like "2-3 eggs", which
    // belongs to the primary pattern.
    if !name.chars().any(|c| c.is_alphabetic()) {
        return None;
    }

    let clause = caps.get(2)?.as_str();
    let quantity_caps = ALT_QUANTITY_RE.captures(clause);
    let raw_quantity = quantity_caps
        .as_ref()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or("1");
    let unit = quantity_caps
        .as_ref()
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Some(ParsedIngredient {
        quantity: parse_quantity(raw_quantity),
        unit,
        name: name.to_string(),
    })
}

/// First bound of a `2-3` or `2–3` style range.
fn first_range_bound(raw: &str) -> &str {
    raw.split(['-', '–']).next().unwrap_or(raw).trim()
}

/// Sum the whitespace-separated parts of a quantity token: vulgar fraction
/// glyphs map through the fixed table, `a/b` divides, anything else parses
/// as a leading float. An empty or zero total defaults to 1.
fn parse_quantity(raw: &str) -> f64 {
    let mut total = 0.0;
    for part in raw.split_whitespace() {
        if let Some(value) = fraction_glyph_value(part) {
            total += value;
        } else if part.contains('/') {
            let mut pieces = part.split('/');
            let numerator = pieces.next().and_then(|p| p.parse::<f64>().ok());
            let denominator = pieces.next().and_then(|p| p.parse::<f64>().ok());
            if let (Some(numerator), Some(denominator)) = (numerator, denominator) {
                if denominator != 0.0 {
                    total += numerator / denominator;
                }
            }
        } else if let Some(value) = leading_float(part) {
            total += value;
        }
    }

    if total == 0.0 {
        1.0
    } else {
        total
    }
}

fn fraction_glyph_value(part: &str) -> Option<f64> {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => FRACTION_GLYPHS
            .iter()
            .find(|(candidate, _)| *candidate == glyph)
            .map(|(_, value)| *value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(quantity: f64, unit: &str, name: &str) -> ParsedIngredient {
        ParsedIngredient {
            quantity,
            unit: unit.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn mixed_number_with_fraction() {
        assert_eq!(
            parse_ingredient_line("1 1/2 cups flour"),
            parsed(1.5, "cups", "flour")
        );
    }

    #[test]
    fn unicode_vulgar_fraction() {
        assert_eq!(parse_ingredient_line("¾ tsp salt"), parsed(0.75, "tsp", "salt"));
    }

    #[test]
    fn alternate_form_supersedes_primary() {
        assert_eq!(
            parse_ingredient_line("Butter - 2 tbsp"),
            parsed(2.0, "tbsp", "Butter")
        );
    }

    #[test]
    fn alternate_form_with_colon() {
        assert_eq!(
            parse_ingredient_line("Olive oil: 3 tbsp"),
            parsed(3.0, "tbsp", "Olive oil")
        );
    }

    #[test]
    fn range_uses_first_bound_and_stays_unitless() {
        assert_eq!(parse_ingredient_line("2-3 eggs"), parsed(2.0, "", "eggs"));
    }

    #[test]
    fn en_dash_range() {
        assert_eq!(parse_ingredient_line("2–3 eggs"), parsed(2.0, "", "eggs"));
    }

    #[test]
    fn parenthesized_aside_is_stripped() {
        assert_eq!(
            parse_ingredient_line("2 cups flour (sifted, about 250g)"),
            parsed(2.0, "cups", "flour")
        );
    }

    #[test]
    fn dashed_name_keeps_alternate_form() {
        assert_eq!(
            parse_ingredient_line("All-purpose flour - 2 cups"),
            parsed(2.0, "cups", "All-purpose flour")
        );
    }

    #[test]
    fn fraction_glyph_combines_with_whole_number() {
        assert_eq!(
            parse_ingredient_line("1 ½ cups sugar"),
            parsed(1.5, "cups", "sugar")
        );
    }

    #[test]
    fn division_by_zero_is_skipped() {
        // "1/0" contributes nothing, so the quantity falls back to 1.
        assert_eq!(parse_ingredient_line("1/0 cups milk"), parsed(1.0, "cups", "milk"));
    }

    #[test]
    fn non_numeric_fraction_is_skipped() {
        assert_eq!(parse_ingredient_line("a/b cups milk"), parsed(1.0, "", "a/b cups milk"));
    }

    #[test]
    fn bare_name_defaults_quantity() {
        assert_eq!(parse_ingredient_line("salt"), parsed(1.0, "", "salt"));
    }

    #[test]
    fn decimal_quantities() {
        assert_eq!(parse_ingredient_line("0.5 cups cream"), parsed(0.5, "cups", "cream"));
        assert_eq!(parse_ingredient_line("2.5 dl milk"), parsed(2.5, "dl", "milk"));
    }

    #[test]
    fn count_followed_by_descriptor() {
        assert_eq!(
            parse_ingredient_line("2 large eggs"),
            parsed(2.0, "large", "eggs")
        );
    }

    #[test]
    fn empty_line_yields_defaults() {
        assert_eq!(parse_ingredient_line("(to taste)"), parsed(1.0, "", ""));
    }
}
