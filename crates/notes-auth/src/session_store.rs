use notes_core::Account;
use notes_db::{JsonStore, Result as DbResult, SESSION_KEY};

/// The persisted "who is logged in" pointer. Holds the whole account record.
#[derive(Clone)]
pub struct SessionStore {
    store: JsonStore,
}

impl SessionStore {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> DbResult<Option<Account>> {
        self.store.get(SESSION_KEY).await
    }

    pub async fn save(&self, account: &Account) -> DbResult<()> {
        self.store.set(SESSION_KEY, account).await
    }

    pub async fn clear(&self) -> DbResult<()> {
        self.store.remove(SESSION_KEY).await
    }
}
