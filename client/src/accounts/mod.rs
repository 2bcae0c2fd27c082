//! Local account directory: registration, login, logout, password reset, and
//! admin maintenance over a [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`Accounts`] from form handlers and mirror the returned
//! [`Session`] into the shared `AuthState` signal. Nothing here is reactive;
//! every call reads the stored list fresh, so edits made in another tab are
//! picked up on the next operation.
//!
//! TRADE-OFFS
//! ==========
//! Passwords are stored and compared as plaintext and the administrator
//! credentials are compiled in. This is a client-side demo directory, not an
//! authentication system.


pub mod error;
pub mod model;
pub mod validate;

use uuid::Uuid;

use crate::util::storage::{BrowserStore, KeyValueStore, SESSION_KEY, USERS_KEY, load_json, save_json};

pub use error::AccountError;
pub use model::{Role, Session, UserRecord};
pub use validate::{PasswordResetForm, RegistrationForm};

use validate::{normalize_email, validate_login, validate_password, validate_registration};

/// Administrator login. Signing in with these credentials bootstraps the
/// admin record on first use.
pub const ADMIN_EMAIL: &str = "admin@portal.local";
pub const ADMIN_PASSWORD: &str = "admin123";

const ADMIN_FIRST_NAME: &str = "Site";
const ADMIN_LAST_NAME: &str = "Administrator";

/// Account operations over a key/value store.
#[derive(Clone, Debug, Default)]
pub struct Accounts<S> {
    store: S,
}

impl Accounts<BrowserStore> {
    /// Accounts backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl<S: KeyValueStore> Accounts<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All stored users, in storage order. Missing or corrupt data reads as empty.
    pub fn users(&self) -> Vec<UserRecord> {
        load_json(&self.store, USERS_KEY).unwrap_or_default()
    }

    pub fn current_session(&self) -> Option<Session> {
        load_json(&self.store, SESSION_KEY)
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<(), AccountError> {
        save_json(&self.store, USERS_KEY, &users)?;
        Ok(())
    }

    /// Put back the list as it was before a write that was only half applied.
    fn restore_users(&self, previous: &[UserRecord]) {
        if let Err(e) = self.save_users(previous) {
            log::warn!("could not restore user list: {e}");
        }
    }

    /// Create a `user`-role account.
    ///
    /// # Errors
    ///
    /// Returns a validation error, `EmailTaken` when the address is already
    /// registered (or reserved for the administrator), or a storage error.
    pub fn register(&self, form: &RegistrationForm, now: i64) -> Result<UserRecord, AccountError> {
        let valid = validate_registration(form)?;
        let mut users = self.users();
        if valid.email == ADMIN_EMAIL || users.iter().any(|u| u.email == valid.email) {
            return Err(AccountError::EmailTaken);
        }

        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            first_name: valid.first_name,
            last_name: valid.last_name,
            email: valid.email,
            password: valid.password,
            role: Role::User,
            created_at: now,
            last_login_at: None,
            last_logout_at: None,
        };
        users.push(user.clone());
        self.save_users(&users)?;
        log::info!("registered account {}", user.email);
        Ok(user)
    }

    /// Sign in and write the session record.
    ///
    /// The login stamp is rolled back if the session cannot be written.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmail` for a malformed address, `InvalidCredentials`
    /// for an unknown email or wrong password, or a storage error.
    pub fn login(&self, email: &str, password: &str, now: i64) -> Result<Session, AccountError> {
        let email = validate_login(email, password)?;
        let previous = self.users();
        let mut users = previous.clone();

        let index = if email == ADMIN_EMAIL {
            if password != ADMIN_PASSWORD {
                return Err(AccountError::InvalidCredentials);
            }
            bootstrap_admin(&mut users, now)
        } else {
            let index = users
                .iter()
                .position(|u| u.email == email)
                .ok_or(AccountError::InvalidCredentials)?;
            if users[index].password != password {
                return Err(AccountError::InvalidCredentials);
            }
            index
        };

        let user = &mut users[index];
        user.last_login_at = Some(now);
        let session = Session::for_user(user, now);

        self.save_users(&users)?;
        if let Err(e) = save_json(&self.store, SESSION_KEY, &session) {
            self.restore_users(&previous);
            return Err(e.into());
        }
        log::info!("signed in {}", session.email);
        Ok(session)
    }

    /// End the current session, stamping the user's logout time.
    ///
    /// Returns the ended session, or `None` when nobody was signed in.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the list or session key cannot be written.
    pub fn logout(&self, now: i64) -> Result<Option<Session>, AccountError> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };

        let previous = self.users();
        let mut users = previous.clone();
        let stamped = match users.iter_mut().find(|u| u.id == session.user_id) {
            Some(user) => {
                user.last_logout_at = Some(now);
                self.save_users(&users)?;
                true
            }
            None => false,
        };
        if let Err(e) = self.store.remove_item(SESSION_KEY) {
            if stamped {
                self.restore_users(&previous);
            }
            return Err(e.into());
        }
        log::info!("signed out {}", session.email);
        Ok(Some(session))
    }

    /// Overwrite a user's password.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmail`, `AdminLocked` for the administrator,
    /// `UnknownEmail`, a password rule error, or a storage error.
    pub fn reset_password(&self, form: &PasswordResetForm) -> Result<(), AccountError> {
        let email = normalize_email(&form.email).ok_or(AccountError::InvalidEmail)?;
        if email == ADMIN_EMAIL {
            return Err(AccountError::AdminLocked);
        }

        let mut users = self.users();
        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or(AccountError::UnknownEmail)?;
        validate_password(&form.new_password, &form.confirm_password)?;
        user.password.clone_from(&form.new_password);

        self.save_users(&users)?;
        log::info!("password reset for {email}");
        Ok(())
    }

    /// Remove a non-admin user. Clears the session if it belonged to them.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound`, `AdminLocked`, or a storage error.
    pub fn delete_user(&self, id: &str) -> Result<UserRecord, AccountError> {
        let previous = self.users();
        let mut users = previous.clone();
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AccountError::UserNotFound)?;
        if users[index].is_admin() {
            return Err(AccountError::AdminLocked);
        }

        let removed = users.remove(index);
        self.save_users(&users)?;
        if self.current_session().is_some_and(|s| s.user_id == removed.id) {
            if let Err(e) = self.store.remove_item(SESSION_KEY) {
                self.restore_users(&previous);
                return Err(e.into());
            }
        }
        log::info!("deleted account {}", removed.email);
        Ok(removed)
    }
}

/// Find or create the admin record, returning its index.
fn bootstrap_admin(users: &mut Vec<UserRecord>, now: i64) -> usize {
    if let Some(index) = users.iter().position(|u| u.email == ADMIN_EMAIL) {
        users[index].role = Role::Admin;
        return index;
    }

    log::info!("bootstrapping administrator account");
    users.push(UserRecord {
        id: Uuid::new_v4().to_string(),
        first_name: ADMIN_FIRST_NAME.to_owned(),
        last_name: ADMIN_LAST_NAME.to_owned(),
        email: ADMIN_EMAIL.to_owned(),
        password: ADMIN_PASSWORD.to_owned(),
        role: Role::Admin,
        created_at: now,
        last_login_at: None,
        last_logout_at: None,
    });
    users.len() - 1
}
