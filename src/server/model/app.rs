use sea_orm::DatabaseConnection;

/// Shared state available to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// ID of the user that favorite operations act on behalf of.
    ///
    /// Resolved once at startup from configuration; there is no login flow, so
    /// every request is served as this user.
    pub current_user_id: i32,
}

impl From<(DatabaseConnection, i32)> for AppState {
    fn from((db, current_user_id): (DatabaseConnection, i32)) -> Self {
        Self {
            db,
            current_user_id,
        }
    }
}
