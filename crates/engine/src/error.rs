//! The module contains the error the engine can throw.
//!
//! The only failure the engine knows about is a lookup miss:
//!
//! - [`RecipeNotFound`] thrown when a recipe id is not in the store.
//!
//! Every operation that resolves an id (update, delete, meal planning and
//! reading the meal plan back) propagates it unchanged.
//!
//!  [`RecipeNotFound`]: EngineError::RecipeNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(u64),
}
