//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Storage-backed
//! records are mirrored here so cards and the navbar react to changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::accounts::AccountStore;
use crate::error::GuideResult;
use crate::models::{Account, SavedItem};
use crate::saved::SavedStore;
use crate::storage::LocalStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in account, if any
    pub session: Option<Account>,
    /// Bookmarks in insertion order
    pub saved: Vec<SavedItem>,
}

impl AppState {
    /// Hydrate from localStorage; an unusable storage yields an empty state.
    pub fn load() -> Self {
        let storage = match LocalStorage::open() {
            Ok(storage) => storage,
            Err(e) => {
                log::error!("[STORE] {}", e);
                return Self::default();
            }
        };
        let session = AccountStore::new(storage.clone()).current_session().unwrap_or_else(|e| {
            log::warn!("[STORE] session: {}", e);
            None
        });
        let saved = SavedStore::new(storage).items().unwrap_or_else(|e| {
            log::warn!("[STORE] saved: {}", e);
            Vec::new()
        });
        log::debug!("[STORE] Loaded session={} saved={}", session.is_some(), saved.len());
        Self { session, saved }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn saved_store() -> GuideResult<SavedStore<LocalStorage>> {
    Ok(SavedStore::new(LocalStorage::open()?))
}

pub fn account_store() -> GuideResult<AccountStore<LocalStorage>> {
    Ok(AccountStore::new(LocalStorage::open()?))
}

// ========================
// Store Helper Functions
// ========================

/// Toggle a bookmark in storage and refresh the mirrored list
pub fn store_toggle_saved(store: &AppStore, item: SavedItem) -> GuideResult<bool> {
    let saved = saved_store()?;
    let now_saved = saved.toggle(item)?;
    *store.saved().write() = saved.items()?;
    Ok(now_saved)
}

/// Add a tour spot to the plan and refresh the mirrored list
pub fn store_add_to_plan(store: &AppStore, name: &str) -> GuideResult<bool> {
    let saved = saved_store()?;
    let added = saved.add_to_plan(name)?;
    *store.saved().write() = saved.items()?;
    Ok(added)
}

/// Check credentials and publish the session
pub fn store_login(store: &AppStore, email: &str, password: &str) -> GuideResult<Account> {
    let account = account_store()?.login(email, password)?;
    *store.session().write() = Some(account.clone());
    Ok(account)
}

pub fn store_logout(store: &AppStore) -> GuideResult<()> {
    account_store()?.logout()?;
    *store.session().write() = None;
    Ok(())
}
