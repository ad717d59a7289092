use serde::{Deserialize, Serialize};

use crate::config::EventConfig;

// -- Guests --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGuestRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub message: Option<String>,
}

// -- Invitations --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponse {
    pub guest: InvitationGuest,
    /// True for the reserved `general` identifier — the public variant
    /// addressed to "Family and Friends" instead of a named guest.
    pub general: bool,
    pub event: EventConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationGuest {
    pub first_name: String,
    pub last_name: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_missing_message() {
        let req: CreateGuestRequest =
            serde_json::from_str(r#"{"firstName":"Ana","lastName":"Gomez"}"#).unwrap();
        assert_eq!(req.first_name, "Ana");
        assert!(req.message.is_none());
    }

    #[test]
    fn create_request_rejects_unknown_fields() {
        let result: Result<CreateGuestRequest, _> =
            serde_json::from_str(r#"{"firstName":"Ana","lastName":"Gomez","nickname":"A"}"#);
        assert!(result.is_err());
    }
}
