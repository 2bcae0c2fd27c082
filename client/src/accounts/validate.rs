//! Form validation for registration, login, and password reset.
//!
//! Rules run in field order and the first failure wins, so a form only ever
//! shows one message at a time.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use super::error::AccountError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw registration form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw password reset form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordResetForm {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Registration input after trimming and normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Trim and lowercase an email, rejecting anything without a `local@domain.tld` shape.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if normalized.chars().any(char::is_whitespace) {
        return None;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(normalized)
}

/// Trim a name field, failing with `missing` when nothing is left.
///
/// # Errors
///
/// Returns `missing` for blank input.
pub fn validate_name(raw: &str, missing: AccountError) -> Result<String, AccountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_owned())
}

/// Check password length and confirmation.
///
/// # Errors
///
/// Returns `PasswordTooShort` or `PasswordMismatch`.
pub fn validate_password(password: &str, confirm: &str) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    if password != confirm {
        return Err(AccountError::PasswordMismatch);
    }
    Ok(())
}

/// Validate the whole registration form.
///
/// # Errors
///
/// Returns the first failing field's error.
pub fn validate_registration(form: &RegistrationForm) -> Result<ValidRegistration, AccountError> {
    let first_name = validate_name(&form.first_name, AccountError::MissingFirstName)?;
    let last_name = validate_name(&form.last_name, AccountError::MissingLastName)?;
    let email = normalize_email(&form.email).ok_or(AccountError::InvalidEmail)?;
    validate_password(&form.password, &form.confirm_password)?;
    Ok(ValidRegistration {
        first_name,
        last_name,
        email,
        password: form.password.clone(),
    })
}

/// Validate login input before any storage lookup.
///
/// # Errors
///
/// Returns `InvalidEmail` for a malformed address and `InvalidCredentials`
/// for an empty password.
pub fn validate_login(email: &str, password: &str) -> Result<String, AccountError> {
    let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
    if password.is_empty() {
        return Err(AccountError::InvalidCredentials);
    }
    Ok(email)
}
