use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info};

use super::auth_models::{
    LoginRequest, LoginResponse, LogoutResponse, INVALID_CREDENTIALS, LOGIN_SUCCESS,
    LOGOUT_SUCCESS, MISSING_CREDENTIALS, NOT_AUTHENTICATED,
};
use crate::routes::common_models::{ErrorResponse, FailureResponse, INTERNAL_ERROR};
use crate::session::SessionManager;
use crate::users::{authenticate, UserStore};

// login: verify credentials, then issue the session cookie
pub async fn login(
    sessions: web::Data<SessionManager>,
    users: web::Data<dyn UserStore>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    let email = req.email.trim();
    if email.is_empty() || req.password.is_empty() {
        return HttpResponse::BadRequest().json(FailureResponse::new(MISSING_CREDENTIALS));
    }
    info!("Received login request for: {}", email);

    let user = match authenticate(users.get_ref(), email, &req.password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(FailureResponse::new(INVALID_CREDENTIALS));
        }
        Err(e) => {
            error!("Failed to verify credentials for {}: {}", email, e);
            return HttpResponse::InternalServerError().json(FailureResponse::new(INTERNAL_ERROR));
        }
    };

    let identity = user.identity();
    let mut res = HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: LOGIN_SUCCESS.into(),
        user: identity.clone(),
    });

    if let Err(e) = sessions.create_session(&identity, req.remember_me, &mut res) {
        error!("Failed to create session for user {}: {}", identity.id, e);
        return HttpResponse::InternalServerError().json(FailureResponse::new(INTERNAL_ERROR));
    }

    info!("User {} logged in successfully", identity.id);
    res
}

// logout: always answers with a removal cookie, with or without a live session
pub async fn logout(
    sessions: web::Data<SessionManager>,
    req: HttpRequest,
) -> impl Responder {
    if let Ok(session) = sessions.current_session(&req) {
        if let Some(user) = session.user() {
            info!("Logging out user {}", user.id);
        }
    }

    let mut res = HttpResponse::Ok().json(LogoutResponse {
        success: true,
        message: LOGOUT_SUCCESS.into(),
    });

    match sessions.clear_session(&mut res) {
        Ok(()) => res,
        Err(e) => {
            error!("Failed to clear session: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR))
        }
    }
}

// me: the current session, or 401 when there is none
pub async fn me(
    sessions: web::Data<SessionManager>,
    req: HttpRequest,
) -> impl Responder {
    match sessions.current_session(&req) {
        Ok(session) if session.is_authenticated() => HttpResponse::Ok().json(session),
        Ok(_) => HttpResponse::Unauthorized().json(ErrorResponse::new(NOT_AUTHENTICATED)),
        Err(e) => {
            error!("Failed to read session: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR))
        }
    }
}
