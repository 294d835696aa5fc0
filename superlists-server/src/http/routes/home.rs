//! Landing page

use axum::{response::Html, routing::get, Router};

use crate::templates::HomePage;

/// GET / - new-list form
pub async fn home_page() -> Html<String> {
    Html(HomePage.render())
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_home_template() {
        let Html(body) = home_page().await;
        assert_eq!(body, HomePage.render());
    }
}
