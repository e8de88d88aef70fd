use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    /// Argon2 PHC string; users without one cannot sign in with credentials
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub workspace_id: Option<String>,
}
