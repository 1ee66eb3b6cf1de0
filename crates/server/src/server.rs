use axum::{
    Json, Router,
    routing::{get, post},
};
use tokio::sync::Mutex;

use std::sync::Arc;

use crate::{meal_plan, recipes, statistics, types::Message};
use engine::Engine;

/// Shared handler state.
///
/// Every handler holds the lock for the whole engine call, so requests that
/// touch the store or the meal plan are applied one at a time.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Mutex<Engine>>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

async fn root() -> Json<Message> {
    Json(Message::new("Welcome to the Recipe API!"))
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route("/recipes/search", get(recipes::search))
        .route(
            "/recipes/{id}",
            get(recipes::get).put(recipes::update).delete(recipes::delete),
        )
        .route("/shopping-list", get(statistics::shopping_list))
        .route("/ingredient-usage", get(statistics::ingredient_usage))
        .route("/meal-plan", get(meal_plan::get))
        .route("/meal-plan/{day}", post(meal_plan::plan))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine))).await
}
