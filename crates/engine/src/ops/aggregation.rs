use std::collections::{BTreeSet, HashMap};

use super::Engine;

impl Engine {
    /// Unique ingredients across every recipe, sorted.
    pub fn shopping_list(&self) -> Vec<String> {
        self.store
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// How many times each ingredient appears across all ingredient lists.
    ///
    /// Duplicates inside a single recipe count separately.
    pub fn ingredient_usage(&self) -> HashMap<String, u64> {
        let mut usage = HashMap::new();
        for ingredient in self.store.iter().flat_map(|recipe| &recipe.ingredients) {
            *usage.entry(ingredient.clone()).or_insert(0) += 1;
        }
        usage
    }
}
