use api_types::ErrorDetail;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod meal_plan;
mod recipes;
mod server;
mod statistics;

pub mod types {
    pub use api_types::Message;

    pub mod recipe {
        pub use api_types::recipe::{RecipeCreate, RecipeUpdate, RecipeView, SearchQuery};
    }

    pub mod meal_plan {
        pub use api_types::meal_plan::{MealPlanView, PlanMealQuery};
    }

    pub mod stats {
        pub use api_types::stats::{IngredientUsage, ShoppingList};
    }
}

pub enum ServerError {
    Engine(EngineError),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::RecipeNotFound(_) => StatusCode::NOT_FOUND,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::RecipeNotFound(id) => {
            tracing::debug!("recipe {id} not found");
            "Recipe not found".to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::RecipeNotFound(3)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message_hides_the_id() {
        assert_eq!(
            message_for_engine_error(EngineError::RecipeNotFound(3)),
            "Recipe not found"
        );
    }
}
