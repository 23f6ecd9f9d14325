//! The page navigator behind the address bar

use tokio::sync::mpsc;

/// Loads pages for the address bar.
///
/// `navigate` only starts a load; its outcome comes back later as a
/// `NavigationEvent`.
pub trait Navigator: Send {
    /// URL of the page currently shown
    fn current_url(&self) -> String;
    fn navigate(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Committed(String),
    Failed { url: String, reason: String },
}

/// Posts navigation outcomes to an `AddressBar` from any thread
#[derive(Debug, Clone)]
pub struct NavigationSender {
    tx: mpsc::UnboundedSender<NavigationEvent>,
}

impl NavigationSender {
    pub(crate) fn new(tx: mpsc::UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }

    pub fn committed(&self, url: impl Into<String>) {
        self.send(NavigationEvent::Committed(url.into()));
    }

    pub fn failed(&self, url: impl Into<String>, reason: impl Into<String>) {
        self.send(NavigationEvent::Failed {
            url: url.into(),
            reason: reason.into(),
        });
    }

    pub fn send(&self, event: NavigationEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Address bar gone, dropping navigation event");
        }
    }
}
