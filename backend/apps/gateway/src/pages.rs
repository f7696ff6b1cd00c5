//! Page Handlers
//!
//! Minimal HTML shells for the gated pages. The real UI is rendered by
//! the frontend; these exist so the gate has pages to protect when the
//! gateway is run standalone.

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html("<h1>Home</h1>")
}

pub async fn sign_in() -> Html<&'static str> {
    Html("<h1>Sign in</h1>")
}

pub async fn sign_up() -> Html<&'static str> {
    Html("<h1>Sign up</h1>")
}

pub async fn dashboard() -> Html<&'static str> {
    Html("<h1>Dashboard</h1>")
}
