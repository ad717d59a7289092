//! Static page shells. All dynamic behavior lives in the embedded scripts,
//! which talk to the JSON API the same way any other client would.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

const LANDING: &str = include_str!("../assets/index.html");
const ADMIN: &str = include_str!("../assets/admin.html");
const INVITATION: &str = include_str!("../assets/invitation.html");

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { Html(LANDING) }))
        .route("/admin", get(|| async { Html(ADMIN) }))
        .route("/invitation/{id}", get(|| async { Html(INVITATION) }))
}
