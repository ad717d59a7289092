/// Database row types — these map directly to SQLite rows.
/// Distinct from the gala-types API models to keep the DB layer independent.

#[derive(Debug, Clone)]
pub struct GuestRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
    pub created_at: String,
}
