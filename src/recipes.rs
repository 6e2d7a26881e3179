use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AssetError;

/// One entry of the recipe table.
///
/// `id` is the file stem of every asset derived for the recipe, `query`
/// feeds the stock-photo search and `title` plus the color pair feed the
/// synthesized thumbnails.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub query: String,
    pub base: [u8; 3],
    pub accent: [u8; 3],
}

/// Built-in recipe table for the Flavor Graph starter set.
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "garlic_pasta".to_string(),
            title: "Garlic Olive Oil Pasta".to_string(),
            query: "garlic pasta".to_string(),
            base: [220, 180, 120],
            accent: [255, 240, 200],
        },
        Recipe {
            id: "caprese_salad".to_string(),
            title: "Caprese Salad".to_string(),
            query: "caprese salad".to_string(),
            base: [200, 60, 60],
            accent: [255, 200, 200],
        },
        Recipe {
            id: "veggie_omelette".to_string(),
            title: "Veggie Omelette".to_string(),
            query: "vegetable omelette".to_string(),
            base: [80, 140, 40],
            accent: [200, 255, 200],
        },
        Recipe {
            id: "peanut_stir_fry".to_string(),
            title: "Peanut Stir Fry".to_string(),
            query: "peanut stir fry".to_string(),
            base: [200, 140, 60],
            accent: [255, 230, 200],
        },
    ]
}

/// Load the recipe table, replacing the built-in set when a JSON file is given.
pub fn load_recipes(path: Option<&Path>) -> Result<Vec<Recipe>, AssetError> {
    let Some(path) = path else {
        return Ok(default_recipes());
    };

    let contents = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> =
        serde_json::from_str(&contents).map_err(|e| AssetError::RecipeTable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    if recipes.is_empty() {
        return Err(AssetError::RecipeTable {
            path: path.display().to_string(),
            reason: "table contains no entries".to_string(),
        });
    }

    Ok(recipes)
}
