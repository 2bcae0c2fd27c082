//! Account errors. The `Display` text is what forms show inline.

use crate::util::storage::StorageError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("First name is required.")]
    MissingFirstName,
    #[error("Last name is required.")]
    MissingLastName,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("An account with this email already exists.")]
    EmailTaken,
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("No account found for this email.")]
    UnknownEmail,
    #[error("The administrator account cannot be changed.")]
    AdminLocked,
    #[error("User not found.")]
    UserNotFound,
    #[error("Could not save: {0}")]
    Storage(#[from] StorageError),
}
