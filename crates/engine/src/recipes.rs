//! Recipe records handled by the engine.
//!
//! [`Recipe`] is what the store owns. [`RecipeNew`] and [`RecipeUpdate`]
//! are the inputs of `add_recipe` and `update_recipe`.
use serde::{Deserialize, Serialize};

/// A dish stored in the engine.
///
/// `id` is assigned by the store on insertion and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub(crate) fn apply(&mut self, update: RecipeUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        // An empty list is still a replacement.
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
    }

    pub(crate) fn from_new(id: u64, new: RecipeNew) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            ingredients: new.ingredients,
        }
    }
}

/// Data required to create a recipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeNew {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeNew {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update of a recipe.
///
/// `None` means the field was not supplied and keeps its previous value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

impl RecipeUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.ingredients.is_none()
    }
}
