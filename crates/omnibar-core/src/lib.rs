//! Omnibar Core
//!
//! Configuration, logging and the async `AddressBar` driver tying the input
//! state machine to candidate stores and a page navigator.

mod address_bar;
mod config;
mod error;
mod navigator;
mod omnibar;

pub use address_bar::AddressBar;
pub use config::Config;
pub use error::CoreError;
pub use navigator::{NavigationEvent, NavigationSender, Navigator};
pub use omnibar::Omnibar;

// Re-export the layers below
pub use omnibar_input::{
    EscapePresses, InputError, InputPhase, InputState, InputStateMachine, Key, LookupRequest,
    LookupResult, Selection, Submission, UrlBarIcon,
};
pub use omnibar_storage::{Database, StorageError};
pub use omnibar_suggest::{
    Candidate, CandidateKind, CandidateStore, Entry, MatchRanker, MemoryStore, ProviderRegistry,
    SearchProvider, SqliteStore, SuggestError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
