//! App wiring: services construction and router assembly.

use std::sync::Arc;

use axum::{Extension, Router};

use stockroom_core::{AppConfig, CommittedBatch};
use stockroom_engine::{InventoryStore, ReconciliationEngine};
use stockroom_events::InMemoryEventBus;
use stockroom_infra::{InMemoryInventoryStore, ResetService, load_seed};
use stockroom_notifier::{LogAlertSender, LowStockNotifier, WorkerHandle, worker};

pub mod dto;
pub mod errors;
pub mod routes;

type Store = Arc<InMemoryInventoryStore>;
type Bus = Arc<InMemoryEventBus<CommittedBatch>>;

/// Shared services, injected into handlers via `Extension`.
pub struct AppServices {
    pub engine: ReconciliationEngine<Store, Bus>,
    pub reset: ResetService<Store>,
    pub store: Store,
}

/// A fully wired application: router plus the notifier worker handle.
///
/// The handle must be kept alive for the lifetime of the server; dropping
/// without `shutdown()` leaves the worker running until process exit.
pub struct App {
    pub router: Router,
    pub notifier: WorkerHandle,
}

/// Build the router and spawn the notifier worker.
///
/// The store starts from the seed file when it is readable; a missing seed
/// file is not fatal (the reset endpoint can populate it later).
pub fn build_app(config: &AppConfig) -> App {
    let store: Store = match load_seed(&config.seed_path) {
        Ok(records) => {
            tracing::info!(count = records.len(), "seeded inventory from file");
            Arc::new(InMemoryInventoryStore::seeded(records))
        }
        Err(err) => {
            tracing::warn!(error = %err, "starting with empty inventory");
            Arc::new(InMemoryInventoryStore::new())
        }
    };

    let bus: Bus = Arc::new(InMemoryEventBus::new());

    // Subscribe the notifier before the first commit can publish.
    let notifier = LowStockNotifier::new(
        config.alert_threshold,
        config.alert_sender.clone(),
        config.alert_receiver.clone(),
        LogAlertSender,
    );
    let worker_handle = worker::spawn(&bus, notifier);

    let services = Arc::new(AppServices {
        engine: ReconciliationEngine::new(store.clone(), bus),
        reset: ResetService::new(
            config.reset_username.clone(),
            config.reset_password.clone(),
            config.seed_path.clone(),
            store.clone(),
        ),
        store,
    });

    let router = Router::new()
        .merge(routes::products::router())
        .merge(routes::reset::router())
        .merge(routes::inventory::router())
        .layer(Extension(services));

    App {
        router,
        notifier: worker_handle,
    }
}

impl AppServices {
    pub fn scan_inventory(&self) -> Result<Vec<stockroom_core::InventoryRecord>, stockroom_core::StoreError> {
        self.store.scan_all()
    }
}
