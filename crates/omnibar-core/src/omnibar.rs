//! Storage-backed omnibar
//!
//! Opens the database named by the config and hands out address bars that
//! read history and bookmarks from it.

use std::sync::Arc;

use omnibar_storage::Database;
use omnibar_suggest::{MatchRanker, ProviderRegistry, SearchProvider, SqliteStore};

use crate::address_bar::AddressBar;
use crate::config::Config;
use crate::navigator::Navigator;
use crate::Result;

/// Settings key of user-edited search providers
const PROVIDERS_SETTING: &str = "search_providers";

pub struct Omnibar {
    config: Config,
    db: Database,
    store: Arc<SqliteStore>,
    providers: Arc<ProviderRegistry>,
    ranker: Arc<MatchRanker>,
}

impl Omnibar {
    pub fn open(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    /// Omnibar over a throwaway in-memory database
    pub fn open_in_memory(config: Config) -> Result<Self> {
        Self::with_database(config, Database::open_in_memory()?)
    }

    fn with_database(config: Config, db: Database) -> Result<Self> {
        // Providers edited at runtime win over the config file
        let providers = match db.get_json_setting::<Vec<SearchProvider>>(PROVIDERS_SETTING)? {
            Some(saved) => ProviderRegistry::new(saved)?,
            None => config.registry()?,
        };
        let providers = Arc::new(providers);
        let ranker = Arc::new(MatchRanker::with_limit(config.max_suggestions));
        let store = Arc::new(SqliteStore::new(db.clone()));

        tracing::info!(
            database = %config.database_path.display(),
            providers = providers.len(),
            "Omnibar ready"
        );

        Ok(Self {
            config,
            db,
            store,
            providers,
            ranker,
        })
    }

    /// New address bar for a view driven by `navigator`. A view with no
    /// page loaded shows the configured homepage.
    pub fn address_bar<N: Navigator>(&self, navigator: N) -> Result<AddressBar<SqliteStore, N>> {
        let bar = AddressBar::new(
            Arc::clone(&self.store),
            Arc::clone(&self.providers),
            Arc::clone(&self.ranker),
            navigator,
        )?;
        Ok(bar.with_homepage(self.config.homepage.clone()))
    }

    /// Record a committed page load as a history visit
    pub fn record_visit(&self, url: &str, title: &str) -> Result<()> {
        Ok(self.store.history().record_visit(url, title)?)
    }

    pub fn add_bookmark(&self, url: &str, title: &str) -> Result<()> {
        Ok(self.store.bookmarks().add(url, title)?)
    }

    pub fn remove_bookmark(&self, url: &str) -> Result<()> {
        Ok(self.store.bookmarks().remove(url)?)
    }

    pub fn clear_history(&self) -> Result<()> {
        Ok(self.store.history().clear_all()?)
    }

    /// Replace and persist the search providers. Address bars created
    /// afterwards use them.
    pub fn set_providers(&mut self, providers: Vec<SearchProvider>) -> Result<()> {
        let registry = ProviderRegistry::new(providers)?;
        self.db
            .set_json_setting(PROVIDERS_SETTING, &registry.providers())?;
        tracing::info!(count = registry.len(), "Search providers updated");

        self.providers = Arc::new(registry);
        Ok(())
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
