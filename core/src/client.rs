//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the endpoint URL. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the round-trip in
//! between, so the client stays deterministic and free of I/O.

use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, DeleteCheck};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateEnvelope, DeleteReply, ListEnvelope, NewTodo, Todo, TodoId};

const FALLBACK_DELETE_MESSAGE: &str = "Failed to delete todo";

#[derive(Debug, Clone)]
pub struct TodoClient {
    url: String,
}

impl TodoClient {
    /// Client for `{host}/api/todos`.
    pub fn new(host: &str) -> Self {
        Self::from_config(&ApiConfig::with_host(host))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            url: config.request_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url.clone(),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/{id}", self.url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_ok(&response)?;
        let envelope: ListEnvelope = decode(&response.body)?;
        Ok(envelope.data.todos)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_ok(&response)?;
        let envelope: CreateEnvelope = decode(&response.body)?;
        Ok(envelope.data.todo)
    }

    /// Judge a DELETE response according to `check`.
    ///
    /// `Lenient` only requires the body to be JSON. `Strict` also requires a
    /// 2xx status and `"status": "success"`, and otherwise surfaces the
    /// server's `message`.
    pub fn parse_delete_todo(&self, response: HttpResponse, check: DeleteCheck) -> Result<(), ApiError> {
        match check {
            DeleteCheck::Lenient => {
                decode::<serde_json::Value>(&response.body)?;
                Ok(())
            }
            DeleteCheck::Strict => {
                let reply: DeleteReply = decode(&response.body)?;
                if response.is_ok() && reply.status.as_deref() == Some("success") {
                    return Ok(());
                }
                Err(ApiError::Rejected {
                    message: reply
                        .message
                        .unwrap_or_else(|| FALLBACK_DELETE_MESSAGE.to_string()),
                })
            }
        }
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn check_ok(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_ok() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
