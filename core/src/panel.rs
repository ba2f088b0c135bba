//! The todo panel: draft form, todo list, loading flag and error banner.
//!
//! # Design
//! `TodoPanel` is the single owner of all view state. Every operation is a
//! two-step exchange with the host:
//!
//! 1. a `begin` call (`mount`, `load_all`, `submit`, `delete`) updates state
//!    and hands back a `PendingRequest`;
//! 2. the host runs the round-trip and reports the outcome via `complete`.
//!
//! Several requests may be outstanding at once and may complete in any
//! order; each completion writes `is_loading` and `error` unconditionally,
//! so the last one wins. Once the panel is unmounted, completions are
//! dropped without touching state.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::{DeleteCheck, PanelConfig};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoId};

pub const FETCH_FAILED: &str = "Unable to fetch todos";
pub const FIELDS_REQUIRED: &str = "Title and description are required";
pub const CREATE_FAILED: &str = "Failed to add todo";

/// Unsaved contents of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
}

impl FormDraft {
    /// Presence check only: whitespace counts as content.
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Which panel operation a request belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    LoadAll,
    Create,
    Delete(TodoId),
}

/// A request the host must execute and report back through
/// [`TodoPanel::complete`].
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub operation: Operation,
    pub request: HttpRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

#[derive(Debug, Clone)]
pub struct TodoPanel {
    client: TodoClient,
    delete_check: DeleteCheck,
    draft: FormDraft,
    todos: Vec<Todo>,
    status: UiStatus,
    lifecycle: Lifecycle,
}

impl TodoPanel {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            client: TodoClient::from_config(&config.api),
            delete_check: config.delete_check,
            draft: FormDraft::default(),
            todos: Vec::new(),
            status: UiStatus::default(),
            lifecycle: Lifecycle::Created,
        }
    }

    /// Mark the panel visible. Returns the initial load the first time only.
    pub fn mount(&mut self) -> Option<PendingRequest> {
        if self.lifecycle != Lifecycle::Created {
            return None;
        }
        self.lifecycle = Lifecycle::Mounted;
        Some(self.load_all())
    }

    /// After this, every completion is discarded.
    pub fn unmount(&mut self) {
        self.lifecycle = Lifecycle::Unmounted;
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn load_all(&mut self) -> PendingRequest {
        self.status.is_loading = true;
        self.pending(Operation::LoadAll, self.client.build_list_todos())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// The add-todo action.
    ///
    /// Returns `None` when no request needs to be sent: either validation
    /// failed (draft kept, loading untouched) or the body could not be built
    /// (treated as a failed create).
    pub fn submit(&mut self) -> Option<PendingRequest> {
        self.status.error = None;

        if !self.draft.is_complete() {
            self.status.error = Some(FIELDS_REQUIRED.to_string());
            return None;
        }

        self.status.is_loading = true;
        let input = NewTodo {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
        };
        match self.client.build_create_todo(&input) {
            Ok(request) => Some(self.pending(Operation::Create, request)),
            Err(err) => {
                self.apply_create(Err(err));
                None
            }
        }
    }

    /// Map an id as the user typed it (the text the view draws) back to the
    /// loaded todo's id. Unknown tokens fall back to `TodoId::from_str`.
    pub fn resolve_id(&self, token: &str) -> TodoId {
        self.todos
            .iter()
            .find(|todo| todo.id.to_string() == token)
            .map(|todo| todo.id.clone())
            .unwrap_or_else(|| token.parse().unwrap_or_else(|never| match never {}))
    }

    pub fn delete(&mut self, id: TodoId) -> PendingRequest {
        self.status.is_loading = true;
        let request = self.client.build_delete_todo(&id);
        self.pending(Operation::Delete(id), request)
    }

    /// Apply the outcome of a round-trip started by this panel.
    pub fn complete(&mut self, operation: Operation, outcome: Result<HttpResponse, ApiError>) {
        if self.lifecycle == Lifecycle::Unmounted {
            debug!(?operation, "panel unmounted, dropping completion");
            return;
        }

        match operation {
            Operation::LoadAll => {
                match outcome.and_then(|response| self.client.parse_list_todos(response)) {
                    Ok(todos) => {
                        debug!(count = todos.len(), "todos loaded");
                        self.todos = todos;
                    }
                    Err(err) => {
                        warn!(error = %err, "loading todos failed");
                        self.status.error = Some(match err {
                            ApiError::HttpError { .. } => FETCH_FAILED.to_string(),
                            other => other.to_string(),
                        });
                    }
                }
                self.status.is_loading = false;
            }
            Operation::Create => {
                let result = outcome.and_then(|response| self.client.parse_create_todo(response));
                self.apply_create(result);
            }
            Operation::Delete(id) => {
                let check = self.delete_check;
                match outcome.and_then(|response| self.client.parse_delete_todo(response, check)) {
                    Ok(()) => {
                        debug!(%id, "todo deleted");
                        self.todos.retain(|todo| todo.id != id);
                    }
                    Err(err) => {
                        warn!(%id, error = %err, "deleting todo failed");
                        self.status.error = Some(err.to_string());
                    }
                }
                self.status.is_loading = false;
            }
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn status(&self) -> &UiStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    fn pending(&self, operation: Operation, request: HttpRequest) -> PendingRequest {
        debug!(?operation, method = request.method.as_str(), url = %request.url, "request issued");
        PendingRequest { operation, request }
    }

    // The draft is cleared whatever the outcome, but only once a create
    // actually got past validation.
    fn apply_create(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(todo) => {
                debug!(id = %todo.id, "todo created");
                self.todos.insert(0, todo);
            }
            Err(err) => {
                warn!(error = %err, "creating todo failed");
                self.status.error = Some(CREATE_FAILED.to_string());
            }
        }
        self.status.is_loading = false;
        self.draft.clear();
    }
}
