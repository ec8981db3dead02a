//! Shared application state

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::api::{CatalogService, CocktailApi, CocktailDbClient};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::search::SearchSession;
use crate::services::{DiaryStore, FavoritesStore, IdentityStore, Notice, NoticeQueue, NoticeSink};
use crate::storage::{KeyValueStore, SqliteStore};
use crate::DATABASE_FILENAME;

/// Everything the commands operate on
pub struct AppState {
    pub config: AppConfig,
    pub notices: Arc<NoticeQueue>,
    pub storage: Arc<dyn KeyValueStore>,
    pub favorites: Mutex<FavoritesStore>,
    pub identity: IdentityStore,
    pub catalog: Arc<CatalogService>,
    pub search: SearchSession,
}

impl AppState {
    /// Wire the stores and services over the given backends
    ///
    /// # Arguments
    /// * `config` - Loaded settings
    /// * `storage` - Key-value persistence backend
    /// * `api` - Recipe API implementation
    pub fn new(config: AppConfig, storage: Arc<dyn KeyValueStore>, api: Arc<dyn CocktailApi>) -> Self {
        let notices = Arc::new(NoticeQueue::new());
        let sink: Arc<dyn NoticeSink> = notices.clone();

        let favorites = FavoritesStore::load(storage.clone(), sink.clone());
        let identity = IdentityStore::new(storage.clone(), sink.clone());
        let catalog = Arc::new(CatalogService::new(api, sink, config.fallback_to_samples));
        let search = SearchSession::new(catalog.clone());

        Self {
            config,
            notices,
            storage,
            favorites: Mutex::new(favorites),
            identity,
            catalog,
            search,
        }
    }

    /// Open the on-disk state in `data_dir` and the HTTP recipe client
    pub fn open(data_dir: &Path, config: AppConfig) -> Result<Self, AppError> {
        let db_path = data_dir.join(DATABASE_FILENAME);
        let storage = SqliteStore::new(&db_path)?;
        let client = CocktailDbClient::new(&config.api_base_url, config.request_timeout())?;

        info!(path = %db_path.display(), api = %client.base_url(), "Opened cocktail cellar");
        Ok(Self::new(config, Arc::new(storage), Arc::new(client)))
    }

    pub(crate) fn favorites(&self) -> Result<MutexGuard<'_, FavoritesStore>, AppError> {
        self.favorites.lock().map_err(|_| AppError::LockError)
    }

    /// Diary of the logged-in user
    pub(crate) fn diary(&self) -> Result<DiaryStore, AppError> {
        let user = self.identity.current().ok_or(AppError::NotLoggedIn)?;
        Ok(DiaryStore::load(&user.id, self.storage.clone(), self.notices.clone()))
    }

    /// Take pending notices, oldest first
    pub fn drain_notices(&self) -> Vec<Notice> {
        self.notices.drain()
    }
}
