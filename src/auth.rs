//! Login credential check
//!
//! Fake API simulation: the app ships with a single hardcoded account and no
//! login backend. The check runs locally and synchronously.

use thiserror::Error;

const VALID_EMAIL: &str = "admin@gmail.com";
const VALID_PASSWORD: &str = "123456";

/// Email and password as entered on the login screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Check credentials against the hardcoded account
pub fn check_login(credentials: &Credentials) -> Result<(), LoginError> {
    if credentials.email == VALID_EMAIL && credentials.password == VALID_PASSWORD {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
