//! HTML pages
//!
//! Each page is a view model with a `render` method. User text goes through
//! [`escape_html`] before it reaches the markup.

pub mod error;
pub mod home;
pub mod list;

pub use error::ErrorPage;
pub use home::HomePage;
pub use list::ListPage;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell.
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Form posting a single `item_text` field to `action`.
pub(crate) fn item_form(action: &str) -> String {
    format!(
        r#"    <form method="POST" action="{action}">
        <input name="item_text" id="id_new_item" placeholder="Enter a to-do item" autofocus>
    </form>"#,
        action = escape_html(action),
    )
}
