use crate::{MealPlan, RecipeNew, RecipeStore};

mod aggregation;
mod meal_plan;
mod recipes;

/// In-memory recipe book: the recipe store plus the meal plan.
///
/// The engine does no locking of its own. Callers sharing it between
/// tasks must serialise access (the server wraps it in a mutex).
#[derive(Debug, Default)]
pub struct Engine {
    store: RecipeStore,
    meal_plan: MealPlan,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    recipes: Vec<RecipeNew>,
}

impl EngineBuilder {
    /// Seed the store. Recipes get ids in the order given.
    pub fn recipes<I>(mut self, recipes: I) -> EngineBuilder
    where
        I: IntoIterator<Item = RecipeNew>,
    {
        self.recipes.extend(recipes);
        self
    }

    pub fn build(self) -> Engine {
        let mut store = RecipeStore::new();
        for recipe in self.recipes {
            store.insert(recipe);
        }

        Engine {
            store,
            meal_plan: MealPlan::new(),
        }
    }
}
