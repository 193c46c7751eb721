use serde::Serialize;

pub const INTERNAL_ERROR: &str = "Erro interno do servidor";
pub const INVALID_REQUEST: &str = "Requisição inválida";

// Plain error body: {"error": "..."}
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self { error: error.into() }
    }
}

// Error body for endpoints that report a success flag: {"success": false, "error": "..."}
#[derive(Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: &str) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
