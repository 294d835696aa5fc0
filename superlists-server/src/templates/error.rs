//! Error page for 4xx/5xx responses

use axum::http::StatusCode;

use super::{escape_html, layout};

#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        let reason = self.status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "    <h1>{} {}</h1>\n    <p>{}</p>\n    <p><a href=\"/\">Start a new list</a></p>",
            self.status.as_u16(),
            reason,
            escape_html(&self.message),
        );
        layout(reason, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_status_and_message() {
        let html = ErrorPage::new(StatusCode::NOT_FOUND, "list '7' not found").render();
        assert!(html.contains("<h1>404 Not Found</h1>"));
        assert!(html.contains("list &#x27;7&#x27; not found"));
    }
}
