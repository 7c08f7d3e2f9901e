use log::debug;
use scraper::Html;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{Direction, Equipment, ExtractedRecipe, Ingredient, Nutrition, Recipe};
use crate::normalize::{
    decode_text, flatten_instructions, parse_category, parse_ingredient_line, parse_iso_minutes,
    parse_nutrition, parse_rating, parse_servings, resolve_image, IngredientEntry,
};

const DEFAULT_NAME: &str = "Untitled";

/// Deserialize a single property of the candidate into the shape its
/// normalizer understands. Each field is read independently, so one
/// malformed property degrades to its default without affecting the rest.
fn schema_field<T: DeserializeOwned>(schema: &Value, key: &str) -> Option<T> {
    schema
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// Assemble one recipe-typed candidate schema into a complete
/// [`ExtractedRecipe`].
///
/// Total by construction: every normalizer has a default, so even a
/// candidate carrying nothing but its type tag yields a full record. The
/// document is consulted only for the title-image fallback chain.
pub fn assemble_recipe(schema: &Value, document: &Html, provisional_id: i64) -> ExtractedRecipe {
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let name = schema_field::<String>(schema, "name")
        .map(|name| decode_text(&name))
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    debug!("Assembling recipe {:?} (provisional id {})", name, provisional_id);

    let recipe = Recipe {
        id: provisional_id,
        name,
        category: parse_category(schema_field(schema, "recipeCategory")),
        title_image: resolve_image(schema_field(schema, "image"), document),
        rating: parse_rating(schema_field(schema, "aggregateRating")),
        favorite: false,
        prep_time: parse_iso_minutes(schema_field::<String>(schema, "prepTime").as_deref()),
        cook_time: parse_iso_minutes(schema_field::<String>(schema, "cookTime").as_deref()),
        servings: parse_servings(schema_field(schema, "recipeYield")),
        created_at: now.clone(),
        updated_at: now,
    };

    let ingredients = assemble_ingredients(schema, provisional_id);
    let directions = assemble_directions(schema, provisional_id);
    // schema.org recipe markup carries no equipment list.
    let equipment: Vec<Equipment> = Vec::new();

    let facts = parse_nutrition(schema_field(schema, "nutrition"));
    let nutrition = Nutrition {
        id: provisional_id,
        recipe_id: provisional_id,
        calories: facts.calories,
        fat: facts.fat,
        carbs: facts.carbs,
        protein: facts.protein,
    };

    ExtractedRecipe {
        recipe,
        ingredients,
        directions,
        equipment,
        nutrition,
    }
}

fn assemble_ingredients(schema: &Value, recipe_id: i64) -> Vec<Ingredient> {
    let entries: Vec<IngredientEntry> = schema_field(schema, "recipeIngredient").unwrap_or_default();

    let mut ingredients = Vec::new();
    for entry in entries {
        let line = match entry {
            IngredientEntry::Text(line) => line,
            IngredientEntry::Other(_) => continue,
        };
        let parsed = parse_ingredient_line(&decode_text(&line));
        ingredients.push(Ingredient {
            id: ingredients.len() as i64 + 1,
            recipe_id,
            ingredient: parsed.name,
            quantity: parsed.quantity,
            unit: parsed.unit,
        });
    }
    ingredients
}

fn assemble_directions(schema: &Value, recipe_id: i64) -> Vec<Direction> {
    flatten_instructions(schema_field(schema, "recipeInstructions"))
        .into_iter()
        .enumerate()
        .map(|(index, description)| Direction {
            id: index as i64 + 1,
            recipe_id,
            title: format!("Step {}", index + 1),
            description: decode_text(&description),
        })
        .collect()
}
