//! Omnibar Input
//!
//! The address bar's edit state and the controllers that drive it:
//! - typing, inline autocompletion and stale-lookup rejection (`machine`)
//! - arrow navigation over the suggestion list (`list`)
//! - escape-to-revert (`escape`)
//! - enter-to-submit and navigation results (`commit`)
//!
//! Everything here is synchronous. Candidate lookups are described by a
//! `LookupRequest` and run elsewhere; their `LookupResult` is fed back in.

mod commit;
mod error;
mod escape;
mod icon;
mod key;
mod list;
mod lookup;
mod machine;
mod selection;
mod state;

pub use commit::Submission;
pub use error::InputError;
pub use escape::EscapePresses;
pub use icon::UrlBarIcon;
pub use key::Key;
pub use lookup::{LookupRequest, LookupResult};
pub use machine::{InlineCompletion, InputState, InputStateMachine};
pub use selection::Selection;
pub use state::InputPhase;

pub type Result<T> = std::result::Result<T, InputError>;
