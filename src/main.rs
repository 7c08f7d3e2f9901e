use std::env;

use log::error;
use recipe_import::RecipeImporter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let recipes = RecipeImporter::builder().url(url).import().await?;
    if recipes.is_empty() {
        error!("No recipe structured data found on this page.");
    }

    println!("{}", serde_json::to_string_pretty(&recipes)?);

    Ok(())
}
