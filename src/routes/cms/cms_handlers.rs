use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::cms_models::{PageListResponse, PageResponse, PAGE_NOT_FOUND};
use crate::cms::{published_page, published_pages, PageStore};
use crate::routes::common_models::{FailureResponse, INTERNAL_ERROR};

// Handler to list every published page
pub async fn get_public_pages(store: web::Data<dyn PageStore>) -> impl Responder {
    match published_pages(store.get_ref()).await {
        Ok(pages) => {
            info!("Serving {} published pages", pages.len());
            HttpResponse::Ok().json(PageListResponse {
                success: true,
                data: pages,
            })
        }
        Err(e) => {
            error!("Failed to fetch published pages: {}", e);
            HttpResponse::InternalServerError().json(FailureResponse::new(INTERNAL_ERROR))
        }
    }
}

// Handler to fetch one published page by slug
pub async fn get_public_page(
    store: web::Data<dyn PageStore>,
    slug: web::Path<String>,
) -> impl Responder {
    let slug = slug.into_inner();

    match published_page(store.get_ref(), &slug).await {
        Ok(Some(page)) => HttpResponse::Ok().json(PageResponse {
            success: true,
            data: page,
        }),
        Ok(None) => {
            info!("Published page not found: {}", slug);
            HttpResponse::NotFound().json(FailureResponse::new(PAGE_NOT_FOUND))
        }
        Err(e) => {
            error!("Failed to fetch page {}: {}", slug, e);
            HttpResponse::InternalServerError().json(FailureResponse::new(INTERNAL_ERROR))
        }
    }
}
