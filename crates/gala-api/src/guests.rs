use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use gala_db::models::GuestRow;
use gala_types::api::CreateGuestRequest;
use gala_types::models::Guest;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_guests(State(state): State<AppState>) -> Result<Json<Vec<Guest>>, ApiError> {
    // Run blocking DB reads off the async runtime
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_guests())
        .await
        .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))??;

    Ok(Json(rows.into_iter().map(guest_from_row).collect()))
}

pub async fn create_guest(
    State(state): State<AppState>,
    Json(req): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Refused before any store call
    let first_name = required_trimmed(&req.first_name, "firstName")?;
    let last_name = required_trimmed(&req.last_name, "lastName")?;
    let message = req.message.unwrap_or_default().trim().to_string();

    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let db = state.clone();
    let row = GuestRow {
        id: id.to_string(),
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        message: message.clone(),
        created_at: created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
    };
    tokio::task::spawn_blocking(move || {
        db.db
            .insert_guest(&row.id, &row.first_name, &row.last_name, &row.message, &row.created_at)
    })
    .await
    .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))??;

    info!("Guest registered: {} {}", first_name, last_name);

    Ok((
        StatusCode::CREATED,
        Json(Guest {
            id,
            first_name,
            last_name,
            message,
            created_at,
        }),
    ))
}

pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let db = state.clone();
    let guest_id = id.to_string();
    let removed = tokio::task::spawn_blocking(move || db.db.delete_guest(&guest_id))
        .await
        .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))??;

    if removed {
        info!("Guest deleted: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("guest"))
    }
}

fn required_trimmed(value: &str, field: &'static str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn guest_from_row(row: GuestRow) -> Guest {
    Guest {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt guest id '{}': {}", row.id, e);
            Uuid::default()
        }),
        created_at: row
            .created_at
            .parse::<chrono::DateTime<Utc>>()
            .unwrap_or_else(|e| {
                warn!("Corrupt created_at '{}' on guest '{}': {}", row.created_at, row.id, e);
                chrono::DateTime::default()
            }),
        first_name: row.first_name,
        last_name: row.last_name,
        message: row.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_trimmed() {
        assert_eq!(required_trimmed("  Ana ", "firstName").unwrap(), "Ana");
    }

    #[test]
    fn whitespace_only_is_refused() {
        let err = required_trimmed("   ", "firstName").unwrap_err();
        assert_eq!(err.to_string(), "firstName is required");
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn empty_is_refused() {
        assert!(required_trimmed("", "lastName").is_err());
    }

    #[test]
    fn corrupt_row_still_produces_a_guest() {
        let guest = guest_from_row(GuestRow {
            id: "not-a-uuid".into(),
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            message: String::new(),
            created_at: "not-a-date".into(),
        });
        assert_eq!(guest.id, Uuid::default());
        assert_eq!(guest.first_name, "Ana");
    }

    #[test]
    fn row_timestamps_parse_back() {
        let guest = guest_from_row(GuestRow {
            id: Uuid::nil().to_string(),
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            message: String::new(),
            created_at: "2024-11-01T10:00:00.000000Z".into(),
        });
        assert_eq!(guest.created_at.to_rfc3339(), "2024-11-01T10:00:00+00:00");
    }
}
