//! The configured key set and privilege checks.

use std::fmt;

use super::{ApiKey, KeySlot, PrivilegeLevel};
use crate::{Error, Result};

/// The API keys configured on a client.
///
/// Any combination of the four slots may be filled. Setting a slot twice
/// keeps the last key. A key with an empty token counts as not configured.
///
/// ## Example
///
/// ```rust
/// use slicingdice::{Credentials, KeySlot, PrivilegeLevel};
///
/// let creds = Credentials::new()
///     .with_read_key("read-key")
///     .with_write_key("write-key");
///
/// let resolved = creds.resolve().unwrap();
/// assert_eq!(resolved.slot(), KeySlot::Write);
///
/// // A write key cannot run queries.
/// assert!(creds.authorize(PrivilegeLevel::Read).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Credentials {
    /// At most one key per slot, sorted by [`KeySlot`] priority.
    keys: Vec<ApiKey>,
}

/// The key chosen for a call.
#[derive(Clone, Copy)]
pub struct ResolvedKey<'a> {
    token: &'a str,
    slot: KeySlot,
}

impl<'a> ResolvedKey<'a> {
    /// Returns the raw token to send in the `Authorization` header.
    #[inline]
    pub fn token(&self) -> &'a str {
        self.token
    }

    /// Returns the slot the key came from.
    #[inline]
    pub fn slot(&self) -> KeySlot {
        self.slot
    }

    /// Returns the privilege the key grants.
    #[inline]
    pub fn level(&self) -> PrivilegeLevel {
        self.slot.level()
    }
}

impl fmt::Debug for ResolvedKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("slot", &self.slot)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Creates an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key, replacing any key already in its slot.
    #[must_use]
    pub fn with_key(mut self, key: ApiKey) -> Self {
        self.insert(key);
        self
    }

    /// Sets the master key.
    #[must_use]
    pub fn with_master_key(self, token: impl Into<String>) -> Self {
        self.with_key(ApiKey::master(token))
    }

    /// Sets the custom key.
    #[must_use]
    pub fn with_custom_key(self, token: impl Into<String>) -> Self {
        self.with_key(ApiKey::custom(token))
    }

    /// Sets the write key.
    #[must_use]
    pub fn with_write_key(self, token: impl Into<String>) -> Self {
        self.with_key(ApiKey::write(token))
    }

    /// Sets the read key.
    #[must_use]
    pub fn with_read_key(self, token: impl Into<String>) -> Self {
        self.with_key(ApiKey::read(token))
    }

    fn insert(&mut self, key: ApiKey) {
        match self.keys.binary_search_by_key(&key.slot(), ApiKey::slot) {
            Ok(index) => self.keys[index] = key,
            Err(index) => self.keys.insert(index, key),
        }
    }

    /// Returns the key configured in `slot`, if any.
    pub fn get(&self, slot: KeySlot) -> Option<&ApiKey> {
        self.keys.iter().find(|key| key.slot() == slot)
    }

    /// Iterates over the configured keys, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = &ApiKey> {
        self.keys.iter()
    }

    /// Returns `true` if no slot holds a non-empty key.
    pub fn is_empty(&self) -> bool {
        self.resolve().is_err()
    }

    /// Picks the key used for every call.
    ///
    /// Slots are tried master, custom, write, read; the first non-empty key
    /// wins. Lower slots are never consulted once a higher one is set, even
    /// when the higher key would be rejected for an operation.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingCredential`](crate::ErrorKind::MissingCredential)
    /// when no slot holds a non-empty key.
    pub fn resolve(&self) -> Result<ResolvedKey<'_>> {
        self.keys
            .iter()
            .find(|key| !key.is_empty())
            .map(|key| ResolvedKey { token: key.token(), slot: key.slot() })
            .ok_or_else(|| Error::missing_credential("you need an api key to use this operation"))
    }

    /// Resolves the key and checks it may perform an operation needing
    /// `required`.
    ///
    /// Admin keys pass every check. Below admin the resolved level must equal
    /// the required level exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingCredential`](crate::ErrorKind::MissingCredential)
    /// when no key is configured, and
    /// [`ErrorKind::InsufficientPrivilege`](crate::ErrorKind::InsufficientPrivilege)
    /// when the resolved key's level does not match.
    pub fn authorize(&self, required: PrivilegeLevel) -> Result<ResolvedKey<'_>> {
        let resolved = self.resolve()?;
        if resolved.level() == PrivilegeLevel::Admin || resolved.level() == required {
            return Ok(resolved);
        }
        Err(Error::insufficient_privilege(format!(
            "{} key cannot perform an operation requiring {} privilege",
            resolved.slot(),
            required
        )))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let configured: Vec<KeySlot> = self.keys.iter().map(ApiKey::slot).collect();
        f.debug_struct("Credentials")
            .field("configured", &configured)
            .finish_non_exhaustive()
    }
}

impl From<ApiKey> for Credentials {
    fn from(key: ApiKey) -> Self {
        Credentials::new().with_key(key)
    }
}

impl FromIterator<ApiKey> for Credentials {
    fn from_iter<I: IntoIterator<Item = ApiKey>>(iter: I) -> Self {
        let mut creds = Credentials::new();
        for key in iter {
            creds.insert(key);
        }
        creds
    }
}
