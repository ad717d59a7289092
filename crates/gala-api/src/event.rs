use axum::Json;
use axum::extract::State;

use gala_types::config::EventConfig;

use crate::state::AppState;

/// Event details and invitation theme, as configured at startup.
pub async fn event_config(State(state): State<AppState>) -> Json<EventConfig> {
    Json(state.event.clone())
}
