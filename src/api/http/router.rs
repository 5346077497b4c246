use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::graph::GraphStore;

use super::{
    handlers::{health, person, root, task},
    middleware::logging_middleware,
    state::AppState,
};

pub fn create_router<S: GraphStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health::check))
        .route("/person", post(person::create))
        .route("/persons", get(person::list))
        .route(
            "/person/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
        .route("/task", post(task::create))
        .route("/tasks", get(task::list))
        .route(
            "/task/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
