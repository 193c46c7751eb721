// In-memory collaborators and fixtures shared by the unit tests.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::cms::{CmsError, PageStore};
use crate::config::SessionConfig;
use crate::models::page::{Page, PageStatus};
use crate::models::session::SessionUser;
use crate::models::user::User;
use crate::users::{UserError, UserStore};

pub fn session_config() -> SessionConfig {
    SessionConfig {
        secret: "0123456789abcdef0123456789abcdef".into(),
        cookie_name: "session_token".into(),
        ttl_minutes: 30,
        remember_days: 10,
        secure_cookie: false,
    }
}

pub fn ana() -> SessionUser {
    SessionUser {
        id: 1,
        name: "Ana".into(),
        email: None,
    }
}

/// A page whose `updated_at` is `minute` minutes after a fixed epoch.
pub fn page(id: i32, slug: &str, status: PageStatus, minute: i64) -> Page {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Page {
        id,
        slug: slug.into(),
        title: slug.to_uppercase(),
        content: format!("<p>{}</p>", slug),
        status,
        created_at: base,
        updated_at: base + Duration::minutes(minute),
    }
}

pub fn user_with_password(id: i32, name: &str, email: &str, password: &str) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        password_hash: bcrypt::hash(password, 4).unwrap(),
    }
}

pub struct InMemoryPageStore {
    pages: Vec<Page>,
    filter_by_status: bool,
}

impl InMemoryPageStore {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            filter_by_status: true,
        }
    }

    /// A store that ignores the requested status, like a broken query would.
    pub fn unfiltered(pages: Vec<Page>) -> Self {
        Self {
            pages,
            filter_by_status: false,
        }
    }
}

#[async_trait]
impl PageStore for InMemoryPageStore {
    async fn pages_by_status(&self, status: PageStatus) -> Result<Vec<Page>, CmsError> {
        Ok(self
            .pages
            .iter()
            .filter(|p| !self.filter_by_status || p.status == status)
            .cloned()
            .collect())
    }

    async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, CmsError> {
        Ok(self.pages.iter().find(|p| p.slug == slug).cloned())
    }
}

pub struct FailingPageStore;

#[async_trait]
impl PageStore for FailingPageStore {
    async fn pages_by_status(&self, _status: PageStatus) -> Result<Vec<Page>, CmsError> {
        Err(CmsError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn page_by_slug(&self, _slug: &str) -> Result<Option<Page>, CmsError> {
        Err(CmsError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserError> {
        Err(UserError::Database(sqlx::Error::PoolTimedOut))
    }
}
