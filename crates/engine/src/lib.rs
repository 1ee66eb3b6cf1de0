//! Recipe book domain logic.
//!
//! [`Engine`] owns an in-memory [`RecipeStore`] and a [`MealPlan`] and
//! exposes the operations the HTTP layer calls: recipe CRUD and search,
//! meal planning, the shopping list and ingredient usage counts.

pub use error::EngineError;
pub use meal_plan::{MealPlan, normalize_day};
pub use ops::{Engine, EngineBuilder};
pub use recipes::{Recipe, RecipeNew, RecipeUpdate};
pub use store::RecipeStore;

mod error;
mod meal_plan;
mod ops;
mod recipes;
mod store;

type ResultEngine<T> = Result<T, EngineError>;
