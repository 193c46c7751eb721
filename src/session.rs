// src/session.rs
//
// Stateless session handling: the session lives entirely in a signed,
// expiring token stored in an HTTP-only cookie. Nothing is persisted on the
// server, so validity is decided by signature and expiry at read time.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::models::session::{Session, SessionUser};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read cookies: {0}")]
    CookieRead(String),

    #[error("failed to sign session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("failed to write session cookie: {0}")]
    CookieWrite(String),

    #[error("session lifetime does not fit the clock")]
    Lifetime,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    iat: i64,
    exp: i64,
    jti: String,
}

pub struct SessionManager {
    cookie_name: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    remember_ttl: Duration,
    secure: bool,
}

impl SessionManager {
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; a token is dead the second `exp` passes.
        validation.leeway = 0;

        Self {
            cookie_name: config.cookie_name.clone(),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            // Out-of-range lifetimes surface as `SessionError::Lifetime` on issue.
            ttl: Duration::try_minutes(config.ttl_minutes).unwrap_or(Duration::MAX),
            remember_ttl: Duration::try_days(config.remember_days).unwrap_or(Duration::MAX),
            secure: config.secure_cookie,
        }
    }

    #[cfg(test)]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Returns the session carried by the request.
    ///
    /// A missing, forged or expired token is not an error: the caller gets an
    /// anonymous session. Unparseable cookies in the header are skipped. Only a
    /// `Cookie` header that is not valid UTF-8 is reported as
    /// `SessionError::CookieRead`.
    pub fn current_session(&self, req: &HttpRequest) -> Result<Session, SessionError> {
        let cookies = req
            .cookies()
            .map_err(|e| SessionError::CookieRead(e.to_string()))?;

        let token = match cookies.iter().find(|c| c.name() == self.cookie_name) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                debug!("No session cookie on request");
                return Ok(Session::anonymous());
            }
        };

        match self.decode_token(&token) {
            Some(user) => Ok(Session::authenticated(user)),
            None => Ok(Session::anonymous()),
        }
    }

    /// Issues a token for `user` and attaches it to `res` as the session cookie.
    pub fn create_session(
        &self,
        user: &SessionUser,
        remember_me: bool,
        res: &mut HttpResponse,
    ) -> Result<(), SessionError> {
        let ttl = if remember_me { self.remember_ttl } else { self.ttl };
        let token = self.issue_token(user, Utc::now(), ttl)?;

        let cookie = Cookie::build(self.cookie_name.clone(), token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(ttl.num_seconds()))
            .finish();

        res.add_cookie(&cookie)
            .map_err(|e| SessionError::CookieWrite(e.to_string()))?;
        info!("Session created for user {} (remember_me: {})", user.id, remember_me);
        Ok(())
    }

    /// Instructs the client to drop the session cookie.
    pub fn clear_session(&self, res: &mut HttpResponse) -> Result<(), SessionError> {
        let cookie = Cookie::build(self.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::ZERO)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .finish();

        res.add_cookie(&cookie)
            .map_err(|e| SessionError::CookieWrite(e.to_string()))
    }

    fn issue_token(
        &self,
        user: &SessionUser,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, SessionError> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(SessionError::Lifetime)?;
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    fn decode_token(&self, token: &str) -> Option<SessionUser> {
        let data = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                debug!("Rejected session token: {}", e);
                return None;
            }
        };

        let id = match data.claims.sub.parse::<i32>() {
            Ok(id) => id,
            Err(_) => {
                debug!("Session token has a non-numeric subject: {}", data.claims.sub);
                return None;
            }
        };

        Some(SessionUser {
            id,
            name: data.claims.name,
            email: data.claims.email,
        })
    }
}
