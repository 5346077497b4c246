//! Task resource handlers.
//!
//! Creation accepts an optional list of Person ids; the node insert and the
//! ASSIGNED_TO edges commit together in the store layer. Ids that match no
//! Person are skipped without error.

use axum::{
    extract::{Json, Path, State},
    response::Json as JsonResponse,
};
use serde::{Deserialize, Serialize};

use crate::api::http::{error::HttpError, state::AppState};
use crate::graph::{GraphStore, Task, TaskProps};

use super::DeleteResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub person_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub task: TaskProps,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub new_name: String,
    pub new_description: String,
}

pub async fn create<S: GraphStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<JsonResponse<CreateTaskResponse>, HttpError> {
    let task = state
        .store
        .create_task(&request.name, &request.description, &request.person_ids)
        .await?;

    Ok(JsonResponse(CreateTaskResponse {
        task,
        message: "Task created and persons assigned successfully".to_string(),
    }))
}

pub async fn list<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> Result<JsonResponse<Vec<Task>>, HttpError> {
    let tasks = state.store.list_tasks().await?;
    Ok(JsonResponse(tasks))
}

pub async fn get_by_id<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<JsonResponse<Option<TaskProps>>, HttpError> {
    let task = state.store.task_by_id(id).await?;
    Ok(JsonResponse(task))
}

pub async fn update<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<JsonResponse<Option<TaskProps>>, HttpError> {
    let updated = state
        .store
        .update_task(id, &request.new_name, &request.new_description)
        .await?;
    Ok(JsonResponse(updated))
}

pub async fn delete<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<JsonResponse<DeleteResponse>, HttpError> {
    state.store.delete_task(id).await?;
    Ok(JsonResponse(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
