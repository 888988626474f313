use crate::auth::{Authenticator, StaticOperators};
use crate::clients::OrderClient;
use crate::config::{ConfigError, ConsoleConfig};
use crate::console::OrdersConsole;
use crate::ledger::StockLedger;
use std::sync::Arc;
use tracing::{error, info};

/// The running console: order collection, session state and page operations.
pub struct AdminSystem {
    pub console: OrdersConsole,
    pub orders: OrderClient,
    pub auth: Authenticator,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    /// Spawns the order collection and session restoration with operators from `config`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConfigError> {
        let provider = StaticOperators::new(config.operators.clone());
        Self::with_provider(config, provider)
    }

    /// Like [`AdminSystem::new`] with a prepared provider, e.g. one holding a remembered session.
    pub fn with_provider(
        config: &ConsoleConfig,
        provider: StaticOperators,
    ) -> Result<Self, ConfigError> {
        let ledger = StockLedger::new(config.capacity()?);

        let (order_actor, order_client) = crate::order_actor::new(config.store.buffer_size);
        let order_handle = tokio::spawn(order_actor.run(()));

        let auth = Authenticator::new(Arc::new(provider));
        let restore_handle = auth.restore();

        let orders = OrderClient::new(order_client);
        info!(
            varieties = ledger.capacity().len(),
            operators = config.operators.len(),
            "Admin system started"
        );

        Ok(Self {
            console: OrdersConsole::new(orders.clone(), ledger),
            orders,
            auth,
            handles: vec![order_handle, restore_handle],
        })
    }

    /// Drops the clients and waits for every task to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down admin system...");

        drop(self.console);
        drop(self.orders);
        drop(self.auth);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("Admin system shutdown complete.");
        Ok(())
    }
}
