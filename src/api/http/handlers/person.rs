//! Person resource handlers.
//!
//! Reads by id answer 200 with a JSON `null` body when no node matches;
//! missing nodes are not a distinct outcome on this API.

use axum::{
    extract::{Json, Path, State},
    response::Json as JsonResponse,
};
use serde::Deserialize;

use crate::api::http::{error::HttpError, state::AppState};
use crate::graph::{GraphStore, Person, PersonProps};

use super::DeleteResponse;

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
    pub age: i64,
}

/// Update is full-replace: both fields are required, and a body missing
/// either one is rejected before the handler runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonRequest {
    pub new_name: String,
    pub new_age: i64,
}

pub async fn create<S: GraphStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<JsonResponse<PersonProps>, HttpError> {
    let created = state
        .store
        .create_person(&request.name, request.age)
        .await?;
    Ok(JsonResponse(created))
}

pub async fn list<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> Result<JsonResponse<Vec<Person>>, HttpError> {
    let persons = state.store.list_persons().await?;
    Ok(JsonResponse(persons))
}

pub async fn get_by_id<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<JsonResponse<Option<PersonProps>>, HttpError> {
    let person = state.store.person_by_id(id).await?;
    Ok(JsonResponse(person))
}

pub async fn update<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePersonRequest>,
) -> Result<JsonResponse<Option<PersonProps>>, HttpError> {
    let updated = state
        .store
        .update_person(id, &request.new_name, request.new_age)
        .await?;
    Ok(JsonResponse(updated))
}

pub async fn delete<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<JsonResponse<DeleteResponse>, HttpError> {
    state.store.delete_person(id).await?;
    Ok(JsonResponse(DeleteResponse {
        message: "Person deleted successfully".to_string(),
    }))
}
