//! Access token cookie construction.
//!
//! The token travels only in an `access_token` cookie: HttpOnly so
//! scripts cannot read it, SameSite=Strict so cross-site pages cannot
//! send it, and Max-Age equal to the token lifetime.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Cookie name carrying the access token.
pub const ACCESS_TOKEN: &str = "access_token";

/// Cookie holding a freshly issued token.
pub fn access_cookie(token: String, max_age_seconds: u64) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::seconds(max_age_seconds as i64))
        .build()
}

/// Expired cookie that removes the token from the browser.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
