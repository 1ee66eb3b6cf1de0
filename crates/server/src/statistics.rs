//! Read-only views derived from every recipe.

use api_types::stats::{IngredientUsage, ShoppingList};
use axum::{Json, extract::State};

use crate::server::ServerState;

pub async fn shopping_list(State(state): State<ServerState>) -> Json<ShoppingList> {
    Json(state.engine.lock().await.shopping_list())
}

pub async fn ingredient_usage(State(state): State<ServerState>) -> Json<IngredientUsage> {
    Json(state.engine.lock().await.ingredient_usage())
}
