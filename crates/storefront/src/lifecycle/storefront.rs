use crate::api::{ApiError, HttpStorefrontApi, SharedApi};
use crate::catalog_actor::{self, CatalogError};
use crate::clients::{CatalogClient, OrderClient};
use crate::config::{ConfigError, StorefrontConfig};
use crate::model::ProductId;
use crate::order_actor::{self, OrderDraft, OrderError, OrderSettings};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Anything that can go wrong between the front end and the actors.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The runtime orchestrator of the storefront.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: starting and stopping the Catalog and Order actors
/// - **Dependency Wiring**: injecting the shared API transport into both
/// - **Configuration**: deriving the order settings from [`StorefrontConfig`]
pub struct Storefront {
    /// Client for interacting with the Catalog actor
    pub catalog_client: CatalogClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    config: StorefrontConfig,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Spawns both actors on the given transport. The catalog fetch starts immediately.
    pub fn start(config: StorefrontConfig, api: SharedApi) -> Self {
        let (catalog_actor, catalog_client) = catalog_actor::new();
        let (order_actor, order_client) = order_actor::new(OrderSettings::from(&config));

        let catalog_handle = tokio::spawn(catalog_actor.run(api.clone()));
        let order_handle = tokio::spawn(order_actor.run(api));

        info!(products_url = %config.products_url, "Storefront started");
        Self {
            catalog_client: CatalogClient::new(catalog_client),
            order_client: OrderClient::new(order_client),
            config,
            handles: vec![catalog_handle, order_handle],
        }
    }

    /// Validates `config` and starts the storefront against the real HTTP API.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        config.validate()?;
        let api = HttpStorefrontApi::new(&config)?;
        Ok(Self::start(config, Arc::new(api)))
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Waits for the catalog, looks the product up and selects it.
    #[instrument(skip(self))]
    pub async fn select_product_by_id(&self, id: ProductId) -> Result<OrderDraft, StorefrontError> {
        self.catalog_client.settled().await?;
        let product = self.catalog_client.find(id).await?;
        Ok(self.order_client.select(product).await?)
    }

    /// Drops the clients and waits for every actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.catalog_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
