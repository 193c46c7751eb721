use serde::Serialize;

/// Identity carried inside a session token.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The session seen by a request. A user is present exactly when the
/// session is authenticated; the fields are private so no other shape can
/// be built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}
