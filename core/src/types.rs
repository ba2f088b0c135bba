//! Domain DTOs and response envelopes for the todo API.
//!
//! # Design
//! The server owns ids and may hand out integers or strings, so `TodoId`
//! accepts both and never interprets them. List and create responses wrap
//! their payload in a `{ "data": ... }` envelope; the envelope types stay
//! private to the client and only the payload escapes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Server-assigned identifier. Compared by kind and value only.
///
/// Numbers keep whatever JSON number the server sent (large, negative or
/// fractional), so no id can make a whole list fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TodoId {
    type Err = Infallible;

    /// Only canonical JSON numbers become `Number`; `"007"` or `"1e3"` stay
    /// text so that `Display` gives back exactly what was parsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Number>() {
            Ok(n) if n.to_string() == s => Ok(TodoId::Number(n)),
            _ => Ok(TodoId::Text(s.to_string())),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n.into())
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub data: ListData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListData {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateEnvelope {
    pub data: CreateData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateData {
    pub todo: Todo,
}

/// Body of a DELETE response. Every field is optional; extra fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeleteReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
