//! Ordered in-memory collection of recipes.
//!
//! The store owns every [`Recipe`] and hands out ids. Ids start at 1, grow
//! by one on each insertion and are never reused, even after a delete.

use crate::{EngineError, Recipe, RecipeNew, ResultEngine};

const FIRST_ID: u64 = 1;

#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    next_id: u64,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a recipe up by id.
    ///
    /// This is the validation step every mutating operation runs first.
    pub fn get(&self, id: u64) -> ResultEngine<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or(EngineError::RecipeNotFound(id))
    }

    pub fn get_mut(&mut self, id: u64) -> ResultEngine<&mut Recipe> {
        self.recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or(EngineError::RecipeNotFound(id))
    }

    /// Append a recipe, assigning it the next free id.
    pub fn insert(&mut self, new: RecipeNew) -> Recipe {
        let recipe = Recipe::from_new(self.next_id, new);
        self.next_id += 1;
        self.recipes.push(recipe.clone());
        recipe
    }

    pub fn remove(&mut self, id: u64) -> ResultEngine<Recipe> {
        let position = self
            .recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or(EngineError::RecipeNotFound(id))?;
        Ok(self.recipes.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Id the next insertion will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
