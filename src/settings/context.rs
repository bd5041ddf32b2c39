use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

/// Session cookie backing the "remember advanced settings" toggle.
pub const REMEMBER_ADVANCED_COOKIE: &str = "swift_mailer_remember_advanced";

/// Request-scoped state the settings form handler depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpdateContext {
    pub remember_advanced_settings: bool,
}

impl UpdateContext {
    pub fn with_advanced() -> Self {
        Self {
            remember_advanced_settings: true,
        }
    }

    pub fn from_cookies(jar: &CookieJar) -> Self {
        let remember_advanced_settings = jar
            .get(REMEMBER_ADVANCED_COOKIE)
            .is_some_and(|c| c.value() == "yes");
        Self {
            remember_advanced_settings,
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for UpdateContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(UpdateContext::from_cookies(&jar))
    }
}
