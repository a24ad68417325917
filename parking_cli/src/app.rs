use crate::{
    arguments::{CatalogOperation, Operation},
    config::{Backend, Config},
    notice::{Notice, NoticeBoard, Section},
    render::{self, Rendered},
};
use anyhow::Context;
use parking_core::{MemoryStore, Registry};
use parking_http::{Catalog, Endpoint, RemoteStore, Url};
use std::time::Instant;

/// Registry plus presentation state, shared by one-shot runs and the REPL.
#[derive(Debug)]
pub struct App {
    registry: Registry,
    catalog: Option<Catalog>,
    notices: NoticeBoard,
}

impl App {
    pub fn new(registry: Registry, catalog: Option<Catalog>, notices: NoticeBoard) -> Self {
        Self {
            registry,
            catalog,
            notices,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let notices = NoticeBoard::new(config.notice_ttl);
        match &config.backend {
            Backend::Memory { total_slots } => {
                tracing::info!("Using in-memory lot with {total_slots} slots");
                let registry = Registry::new(MemoryStore::with_capacity(*total_slots));
                Ok(Self::new(registry, None, notices))
            }
            Backend::Remote { base_url, timeout } => {
                let base_url = Url::parse(base_url)
                    .with_context(|| format!("Invalid parking service URL {base_url}"))?;
                tracing::info!("Using parking service at {base_url}");
                let endpoint = Endpoint::with_timeout(base_url, *timeout)
                    .context("Failed to build HTTP client")?;
                let registry = Registry::new(RemoteStore::new(endpoint.clone()));
                Ok(Self::new(registry, Some(Catalog::new(endpoint)), notices))
            }
        }
    }

    /// Never fails: errors come back as error notices.
    pub async fn run(&mut self, operation: Operation) -> Rendered {
        let rendered = match operation {
            Operation::Entry { plate } => render::entry(self.registry.register_entry(&plate).await),
            Operation::Exit { plate } => render::exit(self.registry.register_exit(&plate).await),
            Operation::Check { plate } => render::check(self.registry.check_presence(&plate).await),
            Operation::Time { plate } => render::time(self.registry.duration(&plate).await),
            Operation::Active => render::active(self.registry.list_active().await),
            Operation::Slots => render::slots(self.registry.check_slots().await),
            Operation::Cancel { plate } => render::cancel(self.registry.cancel(&plate).await),
            Operation::Update { plate, data } => {
                render::update(self.registry.update(&plate, &data.join(" ")).await)
            }
            Operation::Report => render::report(self.registry.generate_report().await),
            Operation::Catalog(operation) => self.run_catalog(operation).await,
        };
        self.notices.post(rendered.notice.clone(), Instant::now());
        rendered
    }

    async fn run_catalog(&self, operation: CatalogOperation) -> Rendered {
        let Some(catalog) = &self.catalog else {
            return Notice::error(
                Section::Catalog,
                "The vehicle catalog needs a remote backend (--remote <URL>)",
            )
            .into();
        };
        match operation {
            CatalogOperation::Add {
                plate,
                model,
                color,
            } => render::catalog_added(catalog.register(&plate, &model, &color).await),
            CatalogOperation::List => render::catalog_list(catalog.list().await),
            CatalogOperation::Delete { id } => {
                let result = catalog.delete(&id).await;
                render::catalog_deleted(&id, result)
            }
        }
    }

    pub fn visible_notices(&mut self) -> Vec<Notice> {
        self.notices.visible(Instant::now())
    }
}
