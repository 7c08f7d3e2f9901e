use serde::{Deserialize, Serialize};

/// Scalar fields of an imported recipe, shaped like the application's
/// `recipes` row. The id is provisional: unique only within one extraction
/// batch, replaced when the persistence layer inserts the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub title_image: String,
    pub rating: f64,
    pub favorite: bool,
    /// Minutes
    pub prep_time: u32,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub recipe_id: i64,
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Direction {
    pub id: i64,
    pub recipe_id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub recipe_id: i64,
    pub equipment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrition {
    pub id: i64,
    pub recipe_id: i64,
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

/// One fully assembled import result: the recipe scalars plus every
/// sub-record that references it by its provisional id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRecipe {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub directions: Vec<Direction>,
    pub equipment: Vec<Equipment>,
    pub nutrition: Nutrition,
}
