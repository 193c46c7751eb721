use serde::Serialize;

use crate::models::page::Page;

pub const PAGE_NOT_FOUND: &str = "Página não encontrada";

#[derive(Serialize)]
pub struct PageListResponse {
    pub success: bool,
    pub data: Vec<Page>,
}

#[derive(Serialize)]
pub struct PageResponse {
    pub success: bool,
    pub data: Page,
}
