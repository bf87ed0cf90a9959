use std::fmt;
use thiserror::Error;

/// Kind of configuration entry named by a lookup or insert failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Host,
    Option,
    GlobalIp,
    Group,
}

impl EntryKind {
    /// Get the display name of the entry kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Host => "Hostname",
            EntryKind::Option => "IPName",
            EntryKind::GlobalIp => "Global IP",
            EntryKind::Group => "Group",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while loading, editing or saving a hosts configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The persisted configuration is not valid JSON of the expected shape.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A user supplied address that is neither an IP literal nor a resolvable name.
    #[error("Unable to resolve {0}")]
    UnresolvedAddress(String),

    #[error("{kind} {name} does not exist")]
    NotFound { kind: EntryKind, name: String },

    /// Creation over an existing entry without `force`.
    #[error("{kind} {name} already exists")]
    AlreadyExists {
        kind: EntryKind,
        name: String,
        /// Value currently stored under `name`.
        existing: String,
        /// Value the caller tried to store.
        requested: String,
    },

    #[error("Group {group} already contains {hostname}")]
    AlreadyMember { group: String, hostname: String },

    #[error("You must specify a config file")]
    MissingConfigPath,
}

impl Error {
    pub(crate) fn not_found(kind: EntryKind, name: &str) -> Self {
        Error::NotFound {
            kind,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
