//! Meal plan API endpoints.

use api_types::{
    Message,
    meal_plan::{MealPlanView, PlanMealQuery},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{ServerError, recipes::map_recipe, server::ServerState};

pub async fn plan(
    State(state): State<ServerState>,
    Path(day): Path<String>,
    Query(params): Query<PlanMealQuery>,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .lock()
        .await
        .plan_meal(&day, params.recipe_id)?;
    tracing::info!("planned recipe {} for {day}", params.recipe_id);

    Ok(Json(Message::new(format!(
        "Planned recipe {} for {day}",
        params.recipe_id
    ))))
}

pub async fn get(State(state): State<ServerState>) -> Result<Json<MealPlanView>, ServerError> {
    let plan = state.engine.lock().await.meal_plan()?;
    Ok(Json(
        plan.into_iter()
            .map(|(day, recipe)| (day, map_recipe(recipe)))
            .collect(),
    ))
}
