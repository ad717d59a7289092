use std::sync::Arc;

use gala_db::Database;
use gala_types::config::EventConfig;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub event: EventConfig,
}
