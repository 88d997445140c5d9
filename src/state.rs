use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::AppConfig;
use crate::services::{FileStore, GithubClient, LocalFileStore, LogNotifier, MessageNotifier};
use crate::store::PortfolioStore;

/// Shared application state. Everything in here is either immutable for the
/// process lifetime (config, issuer) or internally synchronized (store).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn PortfolioStore>,
    pub issuer: TokenIssuer,
    pub files: Arc<dyn FileStore>,
    pub github: GithubClient,
    pub notifier: Arc<dyn MessageNotifier>,
}

impl AppState {
    /// Wire up the default collaborators from configuration. The store is
    /// injected since its choice (Postgres vs in-memory) is made in `main`.
    pub fn new(config: AppConfig, store: Arc<dyn PortfolioStore>) -> Self {
        let issuer = TokenIssuer::new(
            config.security.jwt_secret.clone(),
            config.security.token_ttl_days,
        );
        let files = Arc::new(LocalFileStore::new(
            config.uploads.dir.clone(),
            config.uploads.public_base.clone(),
        ));
        let github = GithubClient::new(&config.github);

        Self {
            config: Arc::new(config),
            store,
            issuer,
            files,
            github,
            notifier: Arc::new(LogNotifier),
        }
    }
}
