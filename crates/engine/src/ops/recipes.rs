use crate::{Recipe, RecipeNew, RecipeUpdate, ResultEngine};

use super::Engine;

impl Engine {
    /// All recipes in insertion order.
    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.store.iter().cloned().collect()
    }

    pub fn get_recipe(&self, id: u64) -> ResultEngine<Recipe> {
        self.store.get(id).cloned()
    }

    /// Store a new recipe. Titles are not required to be unique.
    pub fn add_recipe(&mut self, new: RecipeNew) -> Recipe {
        self.store.insert(new)
    }

    /// Apply the supplied fields of `update` in place and return the result.
    pub fn update_recipe(&mut self, id: u64, update: RecipeUpdate) -> ResultEngine<Recipe> {
        let recipe = self.store.get_mut(id)?;
        recipe.apply(update);
        Ok(recipe.clone())
    }

    /// Remove a recipe. Meal plan entries pointing at it are left untouched.
    pub fn delete_recipe(&mut self, id: u64) -> ResultEngine<Recipe> {
        self.store.remove(id)
    }

    /// Case-insensitive substring match on titles, in store order.
    ///
    /// An empty query matches everything.
    pub fn search_recipes(&self, query: &str) -> Vec<Recipe> {
        let query = query.to_lowercase();
        self.store
            .iter()
            .filter(|recipe| recipe.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}
