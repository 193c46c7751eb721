// src/cms.rs

use async_trait::async_trait;
use log::warn;
use sqlx::MySqlPool;
use thiserror::Error;

use crate::models::page::{Page, PageStatus};

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait PageStore: Send + Sync {
    async fn pages_by_status(&self, status: PageStatus) -> Result<Vec<Page>, CmsError>;

    async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, CmsError>;
}

pub struct MySqlPageStore {
    pool: MySqlPool,
}

impl MySqlPageStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageStore for MySqlPageStore {
    async fn pages_by_status(&self, status: PageStatus) -> Result<Vec<Page>, CmsError> {
        let pages = sqlx::query_as::<_, Page>(
            "SELECT id, slug, title, content, status, created_at, updated_at
             FROM pages
             WHERE status = ?
             ORDER BY updated_at DESC",
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(pages)
    }

    async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, CmsError> {
        let page = sqlx::query_as::<_, Page>(
            "SELECT id, slug, title, content, status, created_at, updated_at
             FROM pages
             WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(page)
    }
}

/// All published pages, most recently updated first.
///
/// Only published pages cross this boundary, whatever the store returns.
pub async fn published_pages(store: &dyn PageStore) -> Result<Vec<Page>, CmsError> {
    let mut pages = store.pages_by_status(PageStatus::Published).await?;
    let fetched = pages.len();
    pages.retain(Page::is_published);
    if pages.len() != fetched {
        warn!(
            "Store returned {} unpublished pages for a published query",
            fetched - pages.len()
        );
    }
    pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(pages)
}

/// The published page with `slug`. Drafts and archived pages read as missing.
pub async fn published_page(store: &dyn PageStore, slug: &str) -> Result<Option<Page>, CmsError> {
    let page = store.page_by_slug(slug).await?;
    Ok(page.filter(Page::is_published))
}
