//! Landing page: start a new list

use super::{item_form, layout};

/// Static landing page with the new-list form
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl HomePage {
    pub fn render(&self) -> String {
        let body = format!(
            "    <h1>Start a new To-Do list</h1>\n{}",
            item_form("/lists/new")
        );
        layout("To-Do lists", &body)
    }
}
