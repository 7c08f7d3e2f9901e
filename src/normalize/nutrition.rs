use serde::Deserialize;

use super::NumberOrText;

/// The schema.org `nutrition` object, reduced to the fields the recipe
/// manager stores. Each field degrades to 0 on its own.
#[derive(Debug, Default, Deserialize)]
pub struct NutritionField {
    #[serde(default)]
    pub calories: Option<NumberOrText>,
    #[serde(rename = "fatContent", default)]
    pub fat_content: Option<NumberOrText>,
    #[serde(rename = "carbohydrateContent", default)]
    pub carbohydrate_content: Option<NumberOrText>,
    #[serde(rename = "proteinContent", default)]
    pub protein_content: Option<NumberOrText>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionFacts {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

pub fn parse_nutrition(field: Option<NutritionField>) -> NutritionFacts {
    let field = field.unwrap_or_default();
    NutritionFacts {
        calories: float_or_zero(field.calories),
        fat: float_or_zero(field.fat_content),
        carbs: float_or_zero(field.carbohydrate_content),
        protein: float_or_zero(field.protein_content),
    }
}

fn float_or_zero(value: Option<NumberOrText>) -> f64 {
    value.map(|value| value.to_f64()).unwrap_or(0.0)
}
