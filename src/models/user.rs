use sqlx::FromRow;

use super::session::SessionUser;

// Account row; the hash never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    pub fn identity(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: Some(self.email.clone()),
        }
    }
}
