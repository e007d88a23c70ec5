use std::sync::Arc;

use brl_store::KvStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::dispatch::Dispatcher;
use crate::error::ServerResult;
use crate::router::build_router;

/// Bond registry server.
pub struct BondServer {
    config: ServerConfig,
    dispatcher: Arc<Dispatcher>,
}

impl BondServer {
    /// Assemble a server over the given store backend.
    pub fn new(config: ServerConfig, store: impl KvStore + 'static) -> Self {
        Self {
            config,
            dispatcher: Arc::new(Dispatcher::new(store)),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.dispatcher))
    }

    /// Bootstrap the registry and start serving requests.
    ///
    /// Bootstrap writes an empty index unconditionally: pointing a fresh
    /// server at a store that already holds bonds wipes their listing.
    /// Inherited behavior, kept deliberately; see the registry docs.
    pub async fn serve(self) -> ServerResult<()> {
        let registry = self.dispatcher.registry();
        registry.bootstrap()?;
        for cred in &self.config.seed_credentials {
            registry.put_credential(&cred.name, cred.ecert.as_bytes())?;
        }

        let app = build_router(Arc::clone(&self.dispatcher));
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("BRL server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}
