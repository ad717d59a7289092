use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use gala_types::GENERAL_INVITATION_ID;
use gala_types::api::{InvitationGuest, InvitationResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Resolve an invitation identifier to a renderable payload.
///
/// The reserved `general` literal short-circuits the store and yields the
/// public variant with empty name fields. An unknown identifier is a defined
/// not-found state, not a failure.
pub async fn resolve_invitation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvitationResponse>, ApiError> {
    if id == GENERAL_INVITATION_ID {
        return Ok(Json(InvitationResponse {
            guest: InvitationGuest::default(),
            general: true,
            event: state.event.clone(),
        }));
    }

    // Generated ids are always UUIDs, so anything else cannot be in the store
    let Ok(guest_id) = id.parse::<Uuid>() else {
        return Err(ApiError::NotFound("invitation"));
    };

    let db = state.clone();
    let key = guest_id.to_string();
    let row = tokio::task::spawn_blocking(move || db.db.get_guest(&key))
        .await
        .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))??;

    match row {
        Some(row) => Ok(Json(InvitationResponse {
            guest: InvitationGuest {
                first_name: row.first_name,
                last_name: row.last_name,
                message: row.message,
            },
            general: false,
            event: state.event.clone(),
        })),
        None => Err(ApiError::NotFound("invitation")),
    }
}
