use crate::errors::StoreError;
use crate::events::{EventSender, StoreEvent};
use crate::persisted::{Account, Session};
use crate::repository::Repository;
use crate::storage::KeyValueStore;
use crate::{CURRENT_USER_STORAGE_KEY, USERS_STORAGE_KEY};

use log::debug;

pub struct AccountStore<S: KeyValueStore> {
    storage: S,
    accounts: Repository<Account, S>,
    events: EventSender,
}

impl<S: KeyValueStore + Clone> AccountStore<S> {
    pub fn new(storage: S, events: EventSender) -> Self {
        let accounts = Repository::new(storage.clone(), USERS_STORAGE_KEY);
        AccountStore {
            storage,
            accounts,
            events,
        }
    }

    /// Appends a new account. Usernames are unique, case-sensitive, and the
    /// account list only ever grows.
    pub fn register(&self, username: &str, password: &str) -> Result<(), StoreError> {
        if username.is_empty() || password.is_empty() {
            return Err(StoreError::EmptyField);
        }

        let taken = self
            .accounts
            .load()
            .iter()
            .any(|account| account.username == username);
        if taken {
            return Err(StoreError::DuplicateAccount);
        }

        self.accounts.append(Account {
            username: username.to_owned(),
            password: password.to_owned(),
        });
        debug!("registered account {:?}", username);

        let _ = self
            .events
            .send(StoreEvent::AccountRegistered(username.to_owned()));
        Ok(())
    }

    /// Exact match on both fields, then the session pointer is persisted.
    /// No rate limiting, no lockout.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, StoreError> {
        let matched = self
            .accounts
            .load()
            .iter()
            .any(|account| account.username == username && account.password == password);
        if !matched {
            return Err(StoreError::InvalidCredentials);
        }

        self.storage.set(CURRENT_USER_STORAGE_KEY, username);
        let _ = self
            .events
            .send(StoreEvent::SessionStarted(username.to_owned()));
        Ok(Session::signed_in(username))
    }

    pub fn logout(&self) -> Session {
        self.storage.remove(CURRENT_USER_STORAGE_KEY);
        let _ = self.events.send(StoreEvent::SessionEnded);
        Session::anonymous()
    }

    /// Reads the persisted pointer; the page calls this once on load.
    pub fn current_session(&self) -> Session {
        match self.storage.get(CURRENT_USER_STORAGE_KEY) {
            Some(username) => Session::signed_in(&username),
            None => Session::anonymous(),
        }
    }
}
