//! Lookup seams for stored credentials.
//!
//! The connector never owns credentials. It asks an [`ApplicationStore`] for
//! the registered application and a [`TokenStore`] for the grant belonging
//! to a location, both injected at construction time.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::auth::{Application, Token};
use crate::model::Location;

/// Error type returned by store implementations.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Looks up registered OAuth applications by resource owner name.
pub trait ApplicationStore: Send + Sync {
    /// Returns the application registered for `resource_owner`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store cannot be read.
    fn application(&self, resource_owner: &str) -> Result<Option<Application>, StoreError>;
}

/// Looks up the access token stored for a location.
pub trait TokenStore: Send + Sync {
    /// Returns the token stored for `location`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store cannot be read.
    fn token(&self, location: &Location) -> Result<Option<Token>, StoreError>;
}

/// An in-memory [`ApplicationStore`].
#[derive(Debug, Default)]
pub struct MemoryApplicationStore {
    applications: RwLock<HashMap<String, Application>>,
}

impl MemoryApplicationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `application` under `resource_owner`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the lock is poisoned.
    pub fn insert(
        &self,
        resource_owner: impl Into<String>,
        application: Application,
    ) -> Result<(), StoreError> {
        self.applications
            .write()
            .map_err(|e| e.to_string())?
            .insert(resource_owner.into(), application);
        Ok(())
    }
}

impl ApplicationStore for MemoryApplicationStore {
    fn application(&self, resource_owner: &str) -> Result<Option<Application>, StoreError> {
        let applications = self.applications.read().map_err(|e| e.to_string())?;
        Ok(applications.get(resource_owner).cloned())
    }
}

/// An in-memory [`TokenStore`] keyed by location identifier.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<HashMap<String, Token>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `token` for `location`, assigning it to that location.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the lock is poisoned.
    pub fn insert(&self, location: &Location, mut token: Token) -> Result<(), StoreError> {
        token.assign_to(location);
        self.tokens
            .write()
            .map_err(|e| e.to_string())?
            .insert(location.identifier.clone(), token);
        Ok(())
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self, location: &Location) -> Result<Option<Token>, StoreError> {
        let tokens = self.tokens.read().map_err(|e| e.to_string())?;
        Ok(tokens.get(&location.identifier).cloned())
    }
}
