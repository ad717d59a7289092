pub mod api;
pub mod config;
pub mod models;

/// Reserved invitation identifier. Resolving it never touches the store and
/// yields the non-personalized public invitation.
pub const GENERAL_INVITATION_ID: &str = "general";
