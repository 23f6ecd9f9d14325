//! Async address bar driver
//!
//! Wires an `InputStateMachine` to a candidate store and a `Navigator`.
//! Keystrokes are applied synchronously; each lookup they cut runs on
//! Tokio's blocking pool, since the store may hit SQLite. A new lookup
//! cancels the one it supersedes if that has not started yet. `settle` waits
//! only for the latest lookup; superseded results that come back first are
//! dropped by the machine.

use std::sync::Arc;

use omnibar_input::{
    InputState, InputStateMachine, Key, LookupRequest, LookupResult, Submission, UrlBarIcon,
};
use omnibar_suggest::{CandidateStore, MatchRanker, ProviderRegistry};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinSet};

use crate::navigator::{NavigationEvent, NavigationSender, Navigator};
use crate::Result;

pub struct AddressBar<S, N>
where
    S: CandidateStore + ?Sized + 'static,
    N: Navigator,
{
    machine: InputStateMachine,
    store: Arc<S>,
    providers: Arc<ProviderRegistry>,
    ranker: Arc<MatchRanker>,
    navigator: N,
    runtime: Handle,
    lookups: JoinSet<LookupResult>,
    latest: Option<AbortHandle>,
    homepage: Option<String>,
    nav_tx: mpsc::UnboundedSender<NavigationEvent>,
    nav_rx: mpsc::UnboundedReceiver<NavigationEvent>,
    last_submission: Option<Submission>,
}

impl<S, N> AddressBar<S, N>
where
    S: CandidateStore + ?Sized + 'static,
    N: Navigator,
{
    /// Create an address bar showing the navigator's current page.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        store: Arc<S>,
        providers: Arc<ProviderRegistry>,
        ranker: Arc<MatchRanker>,
        navigator: N,
    ) -> Result<Self> {
        let runtime = Handle::try_current()?;
        let (nav_tx, nav_rx) = mpsc::unbounded_channel();
        let machine = InputStateMachine::with_committed(navigator.current_url());

        Ok(Self {
            machine,
            store,
            providers,
            ranker,
            navigator,
            runtime,
            lookups: JoinSet::new(),
            latest: None,
            homepage: None,
            nav_tx,
            nav_rx,
            last_submission: None,
        })
    }

    /// Show `homepage` while the navigator has no page loaded
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self.machine = InputStateMachine::with_committed(self.current_url());
        self
    }

    fn current_url(&self) -> String {
        let url = self.navigator.current_url();
        match &self.homepage {
            Some(homepage) if url.is_empty() => homepage.clone(),
            _ => url,
        }
    }

    pub fn state(&self) -> &InputState {
        self.machine.state()
    }

    pub fn icon(&self) -> UrlBarIcon {
        self.machine.state().icon()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }

    /// Lookups dispatched and not yet collected by `settle`
    pub fn lookups_in_flight(&self) -> usize {
        self.lookups.len()
    }

    /// Handle for reporting navigation outcomes
    pub fn navigation_sender(&self) -> NavigationSender {
        NavigationSender::new(self.nav_tx.clone())
    }

    // === Input ===

    pub fn press(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Char(c) => {
                let mut buf = [0u8; 4];
                let request = self.machine.insert_text(c.encode_utf8(&mut buf))?;
                self.dispatch(request);
            }
            Key::Backspace => {
                let request = self.machine.backspace()?;
                self.dispatch(request);
            }
            Key::Delete => {
                let request = self.machine.delete_forward()?;
                self.dispatch(request);
            }
            Key::ArrowUp => self.machine.on_arrow_up()?,
            Key::ArrowDown => self.machine.on_arrow_down()?,
            Key::Escape => self.machine.on_escape()?,
            Key::Enter => {
                if let Some(submission) = self.machine.on_enter(&self.providers)? {
                    self.navigator.navigate(&submission.url);
                    self.last_submission = Some(submission);
                }
            }
        }
        Ok(())
    }

    /// One keystroke per char
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.press(Key::Char(c))?;
        }
        Ok(())
    }

    /// Replay a WebDriver key string
    pub fn type_keys(&mut self, keys: &str) -> Result<()> {
        for key in Key::sequence(keys) {
            self.press(key)?;
        }
        Ok(())
    }

    pub fn set_value(&mut self, text: &str) -> Result<()> {
        let request = self.machine.set_value(text)?;
        self.dispatch(request);
        Ok(())
    }

    pub fn select(&mut self, start: usize, end: usize) -> Result<()> {
        Ok(self.machine.select(start, end)?)
    }

    pub fn focus(&mut self) -> Result<()> {
        let current = self.current_url();
        Ok(self.machine.focus(&current)?)
    }

    pub fn blur(&mut self) -> Result<()> {
        Ok(self.machine.blur()?)
    }

    pub fn on_navigation(&mut self, event: NavigationEvent) -> Result<()> {
        match event {
            NavigationEvent::Committed(url) => self.machine.on_navigation_committed(&url)?,
            NavigationEvent::Failed { url, reason } => {
                self.machine.on_navigation_failed(&url, &reason)
            }
        }
        Ok(())
    }

    // === Lookups ===

    fn dispatch(&mut self, request: Option<LookupRequest>) {
        let Some(request) = request else {
            return;
        };

        let store = Arc::clone(&self.store);
        let providers = Arc::clone(&self.providers);
        let ranker = Arc::clone(&self.ranker);

        // A blocking task can only be cancelled before it starts running
        if let Some(superseded) = self.latest.take() {
            superseded.abort();
        }
        let handle = self.lookups.spawn_blocking_on(
            move || request.run(store.as_ref(), &providers, &ranker),
            &self.runtime,
        );
        self.latest = Some(handle);
    }

    /// Apply the latest lookup, if one is pending, and every queued
    /// navigation event.
    ///
    /// Superseded lookups still running stay in flight; their results are
    /// discarded whenever they turn up.
    pub async fn settle(&mut self) -> Result<()> {
        while self.machine.pending_lookup().is_some() {
            match self.lookups.join_next().await {
                None => break,
                Some(Ok(result)) => {
                    self.machine.apply_lookup(result)?;
                }
                Some(Err(e)) if e.is_cancelled() => {
                    tracing::trace!("Superseded lookup cancelled");
                }
                Some(Err(e)) => tracing::error!(error = %e, "Lookup task failed"),
            }
        }

        while let Ok(event) = self.nav_rx.try_recv() {
            self.on_navigation(event)?;
        }
        Ok(())
    }
}
