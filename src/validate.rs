//! Field validation
//!
//! Pure functions mapping a form to either a typed payload or the first
//! validation failure in the form's fixed field order. No partial results and
//! no side effects; validation stops at the first failing field.

use crate::auth::Credentials;
use crate::client::SignupRequest;
use crate::state::{FormField, LoginForm, SignupForm};
use thiserror::Error;

/// A field that failed validation, carrying its user-facing label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(String),
    #[error("{0} is not valid")]
    InvalidFormat(String),
}

/// Validate the signup form in field order: first name, last name, phone.
///
/// On success returns the request body carrying exactly the entered values.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, ValidationError> {
    let first_name = checked(&form.first_name)?;
    let last_name = checked(&form.last_name)?;
    let phone_number = checked(&form.phone)?;
    Ok(SignupRequest {
        first_name,
        last_name,
        phone_number,
    })
}

/// Validate the login form in field order: email, then password.
pub fn validate_login(form: &LoginForm) -> Result<Credentials, ValidationError> {
    let email = checked(&form.email)?;
    let password = checked(&form.password)?;
    Ok(Credentials { email, password })
}

/// Apply the required rule, then the field's declared format
fn checked(field: &FormField) -> Result<String, ValidationError> {
    if field.is_empty() {
        return Err(ValidationError::EmptyField(field.label.clone()));
    }
    if !field.format.matches(&field.value) {
        return Err(ValidationError::InvalidFormat(field.label.clone()));
    }
    Ok(field.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signup_form(first: &str, last: &str, phone: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.first_name.value = first.to_string();
        form.last_name.value = last.to_string();
        form.phone.value = phone.to_string();
        form
    }

    fn login_form(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.email.value = email.to_string();
        form.password.value = password.to_string();
        form
    }

    mod signup {
        use super::*;
        use super::assert_eq;

        #[test]
        fn test_all_fields_present_returns_exact_values() {
            let form = signup_form("Jane", "Doe", "5551234");
            let request = validate_signup(&form).unwrap();
            assert_eq!(request.first_name, "Jane");
            assert_eq!(request.last_name, "Doe");
            assert_eq!(request.phone_number, "5551234");
        }

        #[test]
        fn test_empty_first_name_reported_first() {
            let form = signup_form("", "", "");
            let err = validate_signup(&form).unwrap_err();
            assert_eq!(err, ValidationError::EmptyField("First Name".to_string()));
        }

        #[test]
        fn test_empty_last_name_reported_after_first_name() {
            let form = signup_form("Jane", "", "");
            let err = validate_signup(&form).unwrap_err();
            assert_eq!(err, ValidationError::EmptyField("Last Name".to_string()));
        }

        #[test]
        fn test_empty_phone_reported_last() {
            let form = signup_form("Jane", "Doe", "");
            let err = validate_signup(&form).unwrap_err();
            assert_eq!(err, ValidationError::EmptyField("Phone Number".to_string()));
        }

        #[test]
        fn test_no_format_rule_on_signup_fields() {
            // Any non-empty values validate, matching the declared rules
            let form = signup_form("J", "D", "not-a-number");
            assert!(validate_signup(&form).is_ok());
        }

        #[test]
        fn test_error_message_wording() {
            let form = signup_form("", "Doe", "5551234");
            let err = validate_signup(&form).unwrap_err();
            assert_eq!(err.to_string(), "First Name cannot be empty");
        }
    }

    mod login {
        use super::*;
        use super::assert_eq;

        #[test]
        fn test_valid_credentials_pass_through() {
            let form = login_form("admin@gmail.com", "123456");
            let credentials = validate_login(&form).unwrap();
            assert_eq!(credentials.email, "admin@gmail.com");
            assert_eq!(credentials.password, "123456");
        }

        #[test]
        fn test_empty_email_reported_before_password() {
            let form = login_form("", "");
            let err = validate_login(&form).unwrap_err();
            assert_eq!(err, ValidationError::EmptyField("Email".to_string()));
            assert_eq!(err.to_string(), "Email cannot be empty");
        }

        #[test]
        fn test_empty_password_reported_second() {
            let form = login_form("admin@gmail.com", "");
            let err = validate_login(&form).unwrap_err();
            assert_eq!(err.to_string(), "Password cannot be empty");
        }

        #[test]
        fn test_email_without_at_sign_is_invalid_format() {
            let form = login_form("admin.gmail.com", "123456");
            let err = validate_login(&form).unwrap_err();
            assert_eq!(err, ValidationError::InvalidFormat("Email".to_string()));
        }

        #[test]
        fn test_empty_check_runs_before_format_check() {
            let form = login_form("", "123456");
            let err = validate_login(&form).unwrap_err();
            assert!(matches!(err, ValidationError::EmptyField(_)));
        }
    }
}
