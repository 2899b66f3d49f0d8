//! API key slots and privilege levels.

use std::fmt;

use zeroize::Zeroizing;

/// Privilege a key grants, and the privilege an operation requires.
///
/// Levels are compared for equality, not ordered: a write key cannot read
/// and a read key cannot write. Only [`PrivilegeLevel::Admin`] passes every
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivilegeLevel {
    /// Queries and data extraction.
    Read,
    /// Insertion and saved query creation.
    Write,
    /// Everything, including schema and saved query management.
    Admin,
}

impl PrivilegeLevel {
    /// Returns the numeric level used by the service (0, 1 or 2).
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            PrivilegeLevel::Read => 0,
            PrivilegeLevel::Write => 1,
            PrivilegeLevel::Admin => 2,
        }
    }
}

impl fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivilegeLevel::Read => f.write_str("read"),
            PrivilegeLevel::Write => f.write_str("write"),
            PrivilegeLevel::Admin => f.write_str("admin"),
        }
    }
}

/// The four places a key can be configured, in resolution order.
///
/// Slots order by priority: `Master < Custom < Write < Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeySlot {
    /// Account master key.
    Master,
    /// Custom key with service-side permissions.
    Custom,
    /// Write-only key.
    Write,
    /// Read-only key.
    Read,
}

impl KeySlot {
    /// All slots, highest priority first.
    pub const RESOLUTION_ORDER: [KeySlot; 4] =
        [KeySlot::Master, KeySlot::Custom, KeySlot::Write, KeySlot::Read];

    /// Returns the privilege granted by a key in this slot.
    #[inline]
    pub fn level(self) -> PrivilegeLevel {
        match self {
            KeySlot::Master | KeySlot::Custom => PrivilegeLevel::Admin,
            KeySlot::Write => PrivilegeLevel::Write,
            KeySlot::Read => PrivilegeLevel::Read,
        }
    }

    /// Returns the slot name.
    pub fn as_str(self) -> &'static str {
        match self {
            KeySlot::Master => "master",
            KeySlot::Custom => "custom",
            KeySlot::Write => "write",
            KeySlot::Read => "read",
        }
    }
}

impl fmt::Display for KeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API key tagged with its slot.
///
/// The token is wiped from memory on drop and never appears in `Debug`
/// output.
///
/// ## Example
///
/// ```rust
/// use slicingdice::{ApiKey, KeySlot, PrivilegeLevel};
///
/// let key = ApiKey::write("my-write-key");
/// assert_eq!(key.slot(), KeySlot::Write);
/// assert_eq!(key.level(), PrivilegeLevel::Write);
/// assert!(!format!("{:?}", key).contains("my-write-key"));
/// ```
#[derive(Clone)]
pub enum ApiKey {
    /// Master key.
    Master(Zeroizing<String>),
    /// Custom key.
    Custom(Zeroizing<String>),
    /// Write key.
    Write(Zeroizing<String>),
    /// Read key.
    Read(Zeroizing<String>),
}

impl ApiKey {
    /// Creates a key for the given slot.
    pub fn new(slot: KeySlot, token: impl Into<String>) -> Self {
        let token = Zeroizing::new(token.into());
        match slot {
            KeySlot::Master => ApiKey::Master(token),
            KeySlot::Custom => ApiKey::Custom(token),
            KeySlot::Write => ApiKey::Write(token),
            KeySlot::Read => ApiKey::Read(token),
        }
    }

    /// Creates a master key.
    pub fn master(token: impl Into<String>) -> Self {
        Self::new(KeySlot::Master, token)
    }

    /// Creates a custom key.
    pub fn custom(token: impl Into<String>) -> Self {
        Self::new(KeySlot::Custom, token)
    }

    /// Creates a write key.
    pub fn write(token: impl Into<String>) -> Self {
        Self::new(KeySlot::Write, token)
    }

    /// Creates a read key.
    pub fn read(token: impl Into<String>) -> Self {
        Self::new(KeySlot::Read, token)
    }

    /// Returns the slot this key occupies.
    pub fn slot(&self) -> KeySlot {
        match self {
            ApiKey::Master(_) => KeySlot::Master,
            ApiKey::Custom(_) => KeySlot::Custom,
            ApiKey::Write(_) => KeySlot::Write,
            ApiKey::Read(_) => KeySlot::Read,
        }
    }

    /// Returns the privilege this key grants.
    #[inline]
    pub fn level(&self) -> PrivilegeLevel {
        self.slot().level()
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        match self {
            ApiKey::Master(token)
            | ApiKey::Custom(token)
            | ApiKey::Write(token)
            | ApiKey::Read(token) => token.as_str(),
        }
    }

    /// Returns `true` if the token is empty, which counts as not configured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("slot", &self.slot())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
