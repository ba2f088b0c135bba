//! Sans-IO core of the todo panel.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the panel's view
//! state: the creation draft, the todo list, the loading flag and a single
//! error message.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the endpoint URL.
//! - `TodoPanel` owns all mutable state. Its operations return a
//!   `PendingRequest`; the host executes it and calls `TodoPanel::complete`.
//! - `view::render` draws the panel as text and depends only on panel state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod panel;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::{ApiConfig, DeleteCheck, PanelConfig};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use panel::{FormDraft, Operation, PendingRequest, TodoPanel, UiStatus};
pub use types::{NewTodo, Todo, TodoId};
