//! In-memory backend for the todo panel.
//!
//! Speaks the `/api/todos` contract: list and create responses are wrapped
//! in a `{ "data": ... }` envelope, deletes answer with a `status` field.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

/// Todos in insertion order.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::default();
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "fail", "message": message }))).into_response()
}

async fn list_todos(State(db): State<Db>) -> Json<serde_json::Value> {
    let todos = db.read().await.clone();
    Json(json!({ "data": { "todos": todos } }))
}

async fn create_todo(State(db): State<Db>, Json(input): Json<NewTodo>) -> Response {
    if input.title.is_empty() || input.description.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "Title and description are required");
    }
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
    };
    db.write().await.push(todo.clone());
    tracing::info!(id = %todo.id, "todo created");
    (
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "todo": todo } })),
    )
        .into_response()
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let mut todos = db.write().await;
    let Some(index) = todos.iter().position(|todo| todo.id.to_string() == id) else {
        return fail(StatusCode::NOT_FOUND, "Todo not found");
    };
    todos.remove(index);
    tracing::info!(%id, "todo deleted");
    Json(json!({ "status": "success", "data": null })).into_response()
}
