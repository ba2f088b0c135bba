//! Plain-text rendering of a `TodoPanel`.

use crate::panel::TodoPanel;

pub const EMPTY_PLACEHOLDER: &str = "There are no todos yet...";
pub const LOADING_INDICATOR: &str = "Loading...";

/// Draw the whole panel. The output is a pure function of panel state.
pub fn render(panel: &TodoPanel) -> String {
    let mut out = String::new();
    let draft = panel.draft();

    out.push_str("## Add Todo\n");
    if let Some(error) = panel.error() {
        out.push_str(&format!("! {error}\n"));
    }
    out.push_str(&format!("Title:       [{}]\n", draft.title));
    out.push_str(&format!("Description: [{}]\n", draft.description));
    out.push_str("[Add Todo]\n");
    out.push_str("----\n");

    if panel.todos().is_empty() {
        // Hidden while loading so an empty list is not announced early.
        if !panel.is_loading() {
            out.push_str(EMPTY_PLACEHOLDER);
            out.push('\n');
        }
    } else {
        for todo in panel.todos() {
            out.push_str(&format!("* {}\n  {}\n  [delete {}]\n", todo.title, todo.description, todo.id));
        }
    }

    if panel.is_loading() {
        out.push_str(LOADING_INDICATOR);
        out.push('\n');
    }
    out
}
