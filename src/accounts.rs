//! Local Account Store
//!
//! Signup/login against accounts kept in browser storage. Passwords are
//! stored as typed; nothing here leaves the device.

use crate::error::{GuideError, GuideResult};
use crate::models::Account;
use crate::storage::{read_json, read_json_for_update, write_json, KeyValueStore, SESSION_KEY, USERS_KEY};

pub struct AccountStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn accounts(&self) -> GuideResult<Vec<Account>> {
        read_json(&self.storage, USERS_KEY)
    }

    /// Register a new account. Emails are compared exactly.
    pub fn signup(&self, account: Account) -> GuideResult<()> {
        let mut users: Vec<Account> = read_json_for_update(&self.storage, USERS_KEY)?;
        if users.iter().any(|u| u.email == account.email) {
            log::info!("[AUTH] Signup rejected, email taken");
            return Err(GuideError::EmailTaken);
        }
        users.push(account);
        write_json(&self.storage, USERS_KEY, &users)?;
        log::info!("[AUTH] Registered account #{}", users.len());
        Ok(())
    }

    /// Check credentials and record the matching account as the session.
    pub fn login(&self, email: &str, password: &str) -> GuideResult<Account> {
        let user = self
            .accounts()?
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(GuideError::InvalidCredentials)?;
        write_json(&self.storage, SESSION_KEY, &user)?;
        log::info!("[AUTH] Logged in");
        Ok(user)
    }

    pub fn current_session(&self) -> GuideResult<Option<Account>> {
        read_json(&self.storage, SESSION_KEY)
    }

    pub fn logout(&self) -> GuideResult<()> {
        self.storage.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::BTreeMap;

    fn account(email: &str, password: &str) -> Account {
        Account {
            email: email.to_string(),
            password: password.to_string(),
            fields: BTreeMap::new(),
        }
    }

    fn setup() -> (MemoryStore, AccountStore<MemoryStore>) {
        let storage = MemoryStore::new();
        (storage.clone(), AccountStore::new(storage))
    }

    #[test]
    fn test_signup_then_login() {
        let (_, store) = setup();
        store.signup(account("a@x.com", "p")).unwrap();

        let user = store.login("a@x.com", "p").unwrap();
        assert_eq!(user.email, "a@x.com");
        let session = store.current_session().unwrap().expect("session recorded");
        assert_eq!(session, user);
    }

    #[test]
    fn test_session_keeps_extra_fields() {
        let (_, store) = setup();
        let mut form = BTreeMap::new();
        form.insert("name".to_string(), "Asha".to_string());
        form.insert("phone".to_string(), "98300".to_string());
        form.insert("email".to_string(), "a@x.com".to_string());
        form.insert("password".to_string(), "p".to_string());
        let signed_up = Account::from_form(form);
        store.signup(signed_up.clone()).unwrap();

        let user = store.login("a@x.com", "p").unwrap();
        assert_eq!(user, signed_up);
        assert_eq!(store.current_session().unwrap(), Some(signed_up));
    }

    #[test]
    fn test_wrong_password_leaves_session() {
        let (_, store) = setup();
        store.signup(account("a@x.com", "p")).unwrap();

        let err = store.login("a@x.com", "wrong").unwrap_err();
        assert_eq!(err, GuideError::InvalidCredentials);
        assert_eq!(store.current_session().unwrap(), None);

        store.login("a@x.com", "p").unwrap();
        assert!(store.login("a@x.com", "wrong").is_err());
        assert_eq!(store.current_session().unwrap().unwrap().email, "a@x.com");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let (storage, store) = setup();
        store.signup(account("a@x.com", "p")).unwrap();
        let before = storage.get(USERS_KEY).unwrap();

        let err = store.signup(account("a@x.com", "other")).unwrap_err();
        assert_eq!(err, GuideError::EmailTaken);
        assert_eq!(storage.get(USERS_KEY).unwrap(), before);
        assert_eq!(store.accounts().unwrap().len(), 1);
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let (_, store) = setup();
        store.signup(account("a@x.com", "p")).unwrap();
        store.signup(account("A@x.com", "p")).unwrap();
        assert_eq!(store.accounts().unwrap().len(), 2);
        assert!(store.login("A@X.COM", "p").is_err());
    }

    #[test]
    fn test_signup_appends_exactly_one() {
        let (_, store) = setup();
        store.signup(account("a@x.com", "p")).unwrap();
        store.signup(account("b@x.com", "q")).unwrap();
        let emails: Vec<_> = store.accounts().unwrap().into_iter().map(|a| a.email).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_signup_keeps_accounts_with_non_string_fields() {
        let (storage, store) = setup();
        storage
            .set(
                USERS_KEY,
                r#"[{"email":"a@x.com","password":"p"},{"email":"b@x.com","password":"q","age":30}]"#,
            )
            .unwrap();
        assert_eq!(store.accounts().unwrap().len(), 2);

        store.signup(account("c@x.com", "r")).unwrap();
        let emails: Vec<_> = store.accounts().unwrap().into_iter().map(|a| a.email).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);
        let b = store.login("b@x.com", "q").unwrap();
        assert_eq!(b.fields.get("age"), Some(&serde_json::Value::from(30)));
    }

    #[test]
    fn test_signup_leaves_unreadable_users_alone() {
        let (storage, store) = setup();
        storage.set(USERS_KEY, "[{broken").unwrap();

        let err = store.signup(account("c@x.com", "r")).unwrap_err();
        assert_eq!(err, GuideError::CorruptRecord(USERS_KEY.to_string()));
        assert_eq!(storage.get(USERS_KEY).unwrap().as_deref(), Some("[{broken"));
    }

    #[test]
    fn test_logout_clears_session() {
        let (_, store) = setup();
        store.signup(account("a@x.com", "p")).unwrap();
        store.login("a@x.com", "p").unwrap();
        store.logout().unwrap();
        assert_eq!(store.current_session().unwrap(), None);
    }
}
