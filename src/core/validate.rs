//! Credential form checks.
//!
//! Only presence and confirmation are checked; email format and password
//! strength are not.

use super::accounts::{Account, AccountStore};
use super::error::AuthError;
use super::storage::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn validate_signup(form: &SignupForm) -> Result<Account, AuthError> {
    if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(Account {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

/// Field checks first, then email uniqueness against the store.
pub fn submit_signup(
    store: &mut AccountStore,
    storage: &mut dyn KeyValueStore,
    form: &SignupForm,
) -> Result<(), AuthError> {
    let candidate = validate_signup(form)?;
    store.signup(storage, candidate)
}

pub fn submit_login<'a>(store: &'a AccountStore, form: &LoginForm) -> Result<&'a Account, AuthError> {
    store.login(&form.email, &form.password)
}
