//! Mock account store.
//!
//! Passwords are kept verbatim. This is a demo portal and nothing here is
//! meant to protect a credential.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{AuthError, StorageError};
use super::storage::KeyValueStore;

pub const ACCOUNTS_KEY: &str = "accounts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Reads the persisted account list. Missing or malformed payloads yield an
/// empty list.
pub fn load(storage: &dyn KeyValueStore) -> Vec<Account> {
    let Some(raw) = storage.get(ACCOUNTS_KEY) else {
        debug!("no persisted accounts");
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(accounts) => accounts,
        Err(err) => {
            let err = StorageError::PersistedStateCorrupt {
                key: ACCOUNTS_KEY.to_string(),
                reason: err.to_string(),
            };
            warn!(error = %err, "failed to load accounts, starting with none");
            Vec::new()
        }
    }
}

pub fn encode(accounts: &[Account]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(accounts)?)
}

/// Overwrites the persisted list with `accounts`.
pub fn save(storage: &mut dyn KeyValueStore, accounts: &[Account]) {
    let result = encode(accounts).and_then(|json| storage.set(ACCOUNTS_KEY, &json));
    if let Err(err) = result {
        warn!(error = %err, "failed to persist accounts");
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn open(storage: &dyn KeyValueStore) -> Self {
        let accounts = load(storage);
        info!(count = accounts.len(), "accounts loaded");
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|acc| acc.email == email)
    }

    pub fn signup(
        &mut self,
        storage: &mut dyn KeyValueStore,
        candidate: Account,
    ) -> Result<(), AuthError> {
        if self.contains_email(&candidate.email) {
            return Err(AuthError::EmailExists);
        }
        info!(email = %candidate.email, "account created");
        self.accounts.push(candidate);
        save(storage, &self.accounts);
        Ok(())
    }

    pub fn login(&self, email: &str, password: &str) -> Result<&Account, AuthError> {
        self.accounts
            .iter()
            .find(|acc| acc.email == email && acc.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    fn account(name: &str, email: &str, password: &str) -> Account {
        Account {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn signup_then_login_matches_both_fields() {
        let mut storage = MemoryStore::new();
        let mut store = AccountStore::open(&storage);
        store
            .signup(&mut storage, account("Ada", "a@x.com", "p1"))
            .unwrap();

        let found = store.login("a@x.com", "p1").unwrap();
        assert_eq!(found.name, "Ada");
        assert_eq!(store.login("a@x.com", "wrong"), Err(AuthError::InvalidCredentials));
        assert_eq!(store.login("b@x.com", "p1"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn duplicate_email_rejected_regardless_of_other_fields() {
        let mut storage = MemoryStore::new();
        let mut store = AccountStore::open(&storage);
        store
            .signup(&mut storage, account("Ada", "a@x.com", "p1"))
            .unwrap();

        let err = store
            .signup(&mut storage, account("Grace", "a@x.com", "other"))
            .unwrap_err();
        assert_eq!(err, AuthError::EmailExists);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let mut storage = MemoryStore::new();
        let mut store = AccountStore::open(&storage);
        store
            .signup(&mut storage, account("Ada", "a@x.com", "p1"))
            .unwrap();
        store
            .signup(&mut storage, account("Ada", "A@x.com", "p1"))
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.login("A@X.COM", "p1"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn signup_persists_whole_list() {
        let mut storage = MemoryStore::new();
        let mut store = AccountStore::open(&storage);
        store
            .signup(&mut storage, account("Ada", "a@x.com", "p1"))
            .unwrap();
        store
            .signup(&mut storage, account("Grace", "g@x.com", "p2"))
            .unwrap();

        let reopened = AccountStore::open(&storage);
        assert_eq!(reopened.accounts(), store.accounts());
    }

    #[test]
    fn save_is_idempotent_and_round_trips() {
        let accounts = vec![account("Ada", "a@x.com", "p1"), account("Linus", "l@x.com", "p2")];
        let mut storage = MemoryStore::new();

        save(&mut storage, &accounts);
        let first = storage.get(ACCOUNTS_KEY);
        save(&mut storage, &accounts);
        let second = storage.get(ACCOUNTS_KEY);

        assert_eq!(first, second);
        assert_eq!(load(&storage), accounts);
    }

    #[test]
    fn corrupt_payload_loads_empty() {
        let mut storage = MemoryStore::new();
        storage.set(ACCOUNTS_KEY, "[{\"name\": 3").unwrap();
        assert!(load(&storage).is_empty());
    }

    #[test]
    fn payload_uses_plain_field_names() {
        let json = encode(&[account("Ada", "a@x.com", "p1")]).unwrap();
        assert_eq!(json, r#"[{"name":"Ada","email":"a@x.com","password":"p1"}]"#);
    }
}
