//! Request and response records of the recipe book HTTP API.
//!
//! Shared by the server handlers and by anything talking to them.
use serde::{Deserialize, Serialize};

/// Plain acknowledgement body, e.g. `{"message": "Recipe deleted"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub mod recipe {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RecipeView {
        pub id: u64,
        pub title: String,
        pub description: String,
        pub ingredients: Vec<String>,
    }

    /// Request body for `POST /recipes`.
    ///
    /// `ingredients` may be omitted and defaults to an empty list.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeCreate {
        pub title: String,
        pub description: String,
        #[serde(default)]
        pub ingredients: Vec<String>,
    }

    /// Request body for `PUT /recipes/{id}`.
    ///
    /// Omitted (or `null`) fields keep their current value. An empty
    /// `ingredients` list clears the ingredients.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RecipeUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub ingredients: Option<Vec<String>>,
    }

    /// Query string of `GET /recipes/search`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SearchQuery {
        pub query: String,
    }
}

pub mod meal_plan {
    use std::collections::BTreeMap;

    use super::*;
    use crate::recipe::RecipeView;

    /// Query string of `POST /meal-plan/{day}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct PlanMealQuery {
        pub recipe_id: u64,
    }

    /// Day (lowercase) to planned recipe.
    pub type MealPlanView = BTreeMap<String, RecipeView>;
}

pub mod stats {
    use std::collections::HashMap;

    pub type ShoppingList = Vec<String>;

    /// Ingredient to number of occurrences across all recipes.
    pub type IngredientUsage = HashMap<String, u64>;
}
