//! Password hashing, credential validation, and session cookies.

use axum::http::{header, HeaderMap};
use bcrypt::{hash, verify, DEFAULT_COST};
use uuid::Uuid;

use ideaforge_core::{Error, Result};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "ideaforge_session";

/// Session lifetime: 24 hours.
pub const SESSION_TTL_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Hash a password with bcrypt. Rejects passwords shorter than 8 characters.
pub fn hash_password(password: &str) -> Result<String> {
    if password.len() < 8 {
        return Err(Error::Validation(
            "Password must be at least 8 characters long".into(),
        ));
    }

    hash(password, DEFAULT_COST)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored hash. A malformed hash counts as a
/// mismatch, never an error.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

/// Generate a session token.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn validate_username(username: &str) -> Result<()> {
    if username.len() < 3 {
        return Err(Error::Validation(
            "Username must be at least 3 characters long".into(),
        ));
    }
    if username.len() > 50 {
        return Err(Error::Validation(
            "Username is too long (max 50 characters)".into(),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Error::Validation(
            "Username can only contain letters, numbers, underscores, and hyphens".into(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(Error::Validation("Invalid email format".into()));
    }
    let domain = parts[1];
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(Error::Validation("Invalid email domain".into()));
    }
    if email.len() > 254 {
        return Err(Error::Validation("Email is too long".into()));
    }
    Ok(())
}

/// Extract the session token from the request's Cookie header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|cookie| {
        cookie
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|token| token.to_string())
    })
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        SESSION_TTL_MILLIS / 1000
    )
}

/// Set-Cookie value clearing the session.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}
