//! Recipe API endpoints.

use api_types::{
    Message,
    recipe::{RecipeCreate, RecipeUpdate, RecipeView, SearchQuery},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_recipe(recipe: engine::Recipe) -> RecipeView {
    RecipeView {
        id: recipe.id,
        title: recipe.title,
        description: recipe.description,
        ingredients: recipe.ingredients,
    }
}

fn map_recipes(recipes: Vec<engine::Recipe>) -> Vec<RecipeView> {
    recipes.into_iter().map(map_recipe).collect()
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<RecipeView>> {
    let recipes = state.engine.lock().await.list_recipes();
    Json(map_recipes(recipes))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RecipeCreate>,
) -> Json<RecipeView> {
    let recipe = state.engine.lock().await.add_recipe(engine::RecipeNew {
        title: payload.title,
        description: payload.description,
        ingredients: payload.ingredients,
    });
    tracing::info!("created recipe {} \"{}\"", recipe.id, recipe.title);

    Json(map_recipe(recipe))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<RecipeView>, ServerError> {
    let recipe = state.engine.lock().await.get_recipe(id)?;
    Ok(Json(map_recipe(recipe)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<RecipeUpdate>,
) -> Result<Json<RecipeView>, ServerError> {
    let recipe = state.engine.lock().await.update_recipe(
        id,
        engine::RecipeUpdate {
            title: payload.title,
            description: payload.description,
            ingredients: payload.ingredients,
        },
    )?;
    tracing::info!("updated recipe {id}");

    Ok(Json(map_recipe(recipe)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<Message>, ServerError> {
    state.engine.lock().await.delete_recipe(id)?;
    tracing::info!("deleted recipe {id}");

    Ok(Json(Message::new("Recipe deleted")))
}

pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<RecipeView>> {
    let recipes = state.engine.lock().await.search_recipes(&params.query);
    tracing::debug!("search \"{}\" matched {} recipes", params.query, recipes.len());
    Json(map_recipes(recipes))
}
