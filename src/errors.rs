//! Application error model with user-facing message mapping
//!
//! Defines a typed error hierarchy using `thiserror` for internal error
//! handling, and maps each recoverable variant to the notice the chat layer
//! should render back to the user.

use thiserror::Error;

/// Application error type
///
/// Covers all error cases the pagination session core may encounter. Every
/// variant except [`PagerError::Config`] and [`PagerError::Internal`] is
/// recoverable at its point of origin and must be translated by the caller
/// into a user-visible message; none of the recoverable variants are fatal to
/// the process.
#[derive(Debug, Error)]
pub enum PagerError {
    /// A new-search event carried zero results; no session was created
    #[error("search returned no results")]
    EmptyResultSet,
    /// Session key collision on create (caller integration error)
    #[error("session '{0}' already exists")]
    DuplicateKey(String),
    /// Button press referenced a session that no longer exists
    #[error("session '{0}' has expired")]
    SessionExpired(String),
    /// Button press carried an unrecognized direction token
    #[error("unrecognized direction token '{0}'")]
    InvalidDirection(String),
    /// Invalid environment configuration (surfaced at startup)
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Resource exhaustion or unexpected failure in the storage primitive
    #[error("internal error: {0}")]
    Internal(String),
}

impl PagerError {
    /// User-visible notice for the chat layer to render
    ///
    /// The core never formats embeds or display text; this is the one piece
    /// of wording it owns, so every caller reports failures consistently.
    ///
    /// # Mappings
    ///
    /// - `EmptyResultSet` → suggest a different search
    /// - `DuplicateKey` → ask the user to retry
    /// - `SessionExpired` → ask the user to start a new search
    /// - `InvalidDirection` → unrecognized button
    /// - `Config` / `Internal` → generic failure notice
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyResultSet => "No results found. Try a different search.",
            Self::DuplicateKey(_) => "Something went wrong starting that search. Try again.",
            Self::SessionExpired(_) => "This search has expired. Start a new one.",
            Self::InvalidDirection(_) => "That button isn't recognized.",
            Self::Config(_) | Self::Internal(_) => "Something went wrong. Try again later.",
        }
        .to_owned()
    }

    /// Whether the error is recoverable at its point of origin
    ///
    /// `Config` aborts startup and `Internal` signals failure of the storage
    /// primitive itself; everything else maps to a user-facing notice and the
    /// process keeps serving.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Internal(_))
    }
}

/// Type alias for fallible return values
///
/// Use this for all internal functions that can fail. Provides a consistent
/// error type throughout the codebase.
pub type PagerResult<T> = Result<T, PagerError>;
