//! Day to recipe assignments.
//!
//! Keys are always stored lowercase so `Monday`, `MONDAY` and `monday`
//! address the same slot. Values are recipe ids; they are validated when
//! planned but not kept in sync with later deletes.
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MealPlan {
    days: BTreeMap<String, u64>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `recipe_id` to `day`, replacing any previous assignment.
    pub(crate) fn set(&mut self, day: &str, recipe_id: u64) {
        self.days.insert(normalize_day(day), recipe_id);
    }

    pub fn get(&self, day: &str) -> Option<u64> {
        self.days.get(&normalize_day(day)).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.days.iter().map(|(day, id)| (day.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub fn normalize_day(day: &str) -> String {
    day.to_lowercase()
}
