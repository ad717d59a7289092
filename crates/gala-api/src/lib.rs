pub mod error;
pub mod event;
pub mod guests;
pub mod invitations;
pub mod state;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// The JSON API. Page shells are mounted by the server crate alongside this.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/guests", get(guests::list_guests).post(guests::create_guest))
        .route("/api/guests/{id}", axum::routing::delete(guests::delete_guest))
        .route("/api/invitations/{id}", get(invitations::resolve_invitation))
        .route("/api/event", get(event::event_config))
        .with_state(state)
}
