use crate::{AuthError, Result, SessionStore};

use notes_core::{
    Account, Clock, ErrorLocation, ProfileUpdate, ValidationResult, ValidationRules, new_id,
};
use notes_db::{ACCOUNTS_KEY, JsonStore};

use std::panic::Location;
use std::sync::Arc;

/// Registered accounts and the current session.
///
/// The account collection is rewritten as a whole on every change, so
/// overlapping registrations or profile updates are last-writer-wins.
#[derive(Clone)]
pub struct AccountDirectory {
    store: JsonStore,
    session: SessionStore,
    clock: Arc<dyn Clock>,
    rules: ValidationRules,
}

impl AccountDirectory {
    pub fn new(store: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self::with_rules(store, clock, ValidationRules::default())
    }

    pub fn with_rules(store: JsonStore, clock: Arc<dyn Clock>, rules: ValidationRules) -> Self {
        Self {
            session: SessionStore::new(store.clone()),
            store,
            clock,
            rules,
        }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self
            .store
            .get::<Vec<Account>>(ACCOUNTS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Creates an account. Does not log it in.
    pub async fn register(&self, email: &str, password: &str, username: &str) -> Result<Account> {
        check("email", self.rules.validate_email(email))?;
        check("password", self.rules.validate_password(password))?;
        check("username", self.rules.validate_username(username))?;

        let mut accounts = self.list_accounts().await?;
        if accounts.iter().any(|a| a.has_email(email)) {
            return Err(AuthError::DuplicateEmail {
                message: "Email already registered",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let account = Account::new(
            new_id(self.clock.as_ref()),
            email.to_string(),
            username.to_string(),
            password.to_string(),
        );
        accounts.push(account.clone());
        self.save_accounts(&accounts).await?;

        log::info!("Registered account {}", account.id);
        Ok(account)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        let account = self
            .list_accounts()
            .await?
            .into_iter()
            .find(|a| a.has_email(email) && a.password == password)
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.session.save(&account).await?;

        log::info!("Account {} logged in", account.id);
        Ok(account)
    }

    /// Clears the session. Storage failures are logged, never returned.
    pub async fn logout(&self) {
        match self.session.clear().await {
            Ok(()) => log::info!("Session cleared"),
            Err(e) => log::warn!("Failed to clear session: {}", e),
        }
    }

    /// The logged-in account, or `None` when nobody is logged in or the
    /// session cannot be read.
    pub async fn current_session(&self) -> Option<Account> {
        match self.session.load().await {
            Ok(account) => account,
            Err(e) => {
                log::warn!("Failed to load session: {}", e);
                None
            }
        }
    }

    /// Applies every present field at once and re-points the session at the
    /// updated record.
    pub async fn update_profile(&self, account_id: &str, update: ProfileUpdate) -> Result<Account> {
        let mut accounts = self.list_accounts().await?;
        let index = accounts
            .iter()
            .position(|a| a.id == account_id)
            .ok_or_else(|| AuthError::AccountNotFound {
                account_id: account_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(email) = &update.email {
            check("email", self.rules.validate_email(email))?;
            if accounts
                .iter()
                .any(|a| a.id != account_id && a.has_email(email))
            {
                return Err(AuthError::DuplicateEmail {
                    message: "Email already in use",
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
        if let Some(password) = &update.password {
            check("password", self.rules.validate_password(password))?;
        }
        if let Some(username) = &update.username {
            check("username", self.rules.validate_username(username))?;
        }

        let account = &mut accounts[index];
        if let Some(email) = update.email {
            account.email = email;
        }
        if let Some(username) = update.username {
            account.username = username;
        }
        if let Some(password) = update.password {
            account.password = password;
        }
        let updated = account.clone();

        self.save_accounts(&accounts).await?;
        self.session.save(&updated).await?;

        log::info!("Updated profile of account {}", updated.id);
        Ok(updated)
    }

    async fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        self.store.set(ACCOUNTS_KEY, accounts).await?;
        Ok(())
    }
}

#[track_caller]
fn check(field: &'static str, result: ValidationResult) -> Result<()> {
    Ok(result.into_result(field)?)
}
