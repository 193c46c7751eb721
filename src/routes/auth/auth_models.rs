use serde::{Deserialize, Serialize};

use crate::models::session::SessionUser;

pub const LOGIN_SUCCESS: &str = "Login realizado com sucesso";
pub const LOGOUT_SUCCESS: &str = "Logout realizado com sucesso";
pub const NOT_AUTHENTICATED: &str = "Não autenticado";
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";
pub const MISSING_CREDENTIALS: &str = "Email e senha são obrigatórios";

// Login request and response
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "rememberMe")]
    pub remember_me: bool,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: SessionUser,
}

// Logout response
#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}
