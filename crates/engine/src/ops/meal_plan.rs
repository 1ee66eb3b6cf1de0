use std::collections::BTreeMap;

use crate::{MealPlan, Recipe, ResultEngine};

use super::Engine;

impl Engine {
    /// Plan `recipe_id` for `day`. The plan is left untouched if the recipe
    /// does not exist.
    pub fn plan_meal(&mut self, day: &str, recipe_id: u64) -> ResultEngine<()> {
        self.store.get(recipe_id)?;
        self.meal_plan.set(day, recipe_id);
        Ok(())
    }

    /// Resolve every planned day against the current store.
    ///
    /// Fails as a whole if any planned recipe has since been deleted.
    pub fn meal_plan(&self) -> ResultEngine<BTreeMap<String, Recipe>> {
        self.meal_plan
            .entries()
            .map(|(day, id)| -> ResultEngine<(String, Recipe)> {
                let recipe = self.store.get(id)?;
                Ok((day.to_string(), recipe.clone()))
            })
            .collect()
    }

    /// Raw day to id assignments, including dangling ones.
    pub fn planned_days(&self) -> &MealPlan {
        &self.meal_plan
    }
}
