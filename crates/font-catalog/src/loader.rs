//! One-shot background catalog fetch.

use std::{
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use log::{info, warn};

use crate::{catalog::Catalog, provider::CatalogProvider};

/// Catalog fetched once on a background thread.
///
/// A failed fetch is logged and resolves to an empty catalog; there is no
/// retry.
#[derive(Debug)]
pub struct CatalogLoader {
    receiver: Option<Receiver<Catalog>>,
    catalog: Option<Catalog>,
}

impl CatalogLoader {
    /// Start fetching from `provider` without blocking the caller.
    pub fn spawn<P>(provider: P) -> Self
    where
        P: CatalogProvider + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(load(&provider));
        });
        Self { receiver: Some(rx), catalog: None }
    }

    /// Loader that is already resolved.
    pub fn ready(catalog: Catalog) -> Self {
        Self { receiver: None, catalog: Some(catalog) }
    }

    pub fn is_pending(&self) -> bool {
        self.catalog.is_none()
    }

    /// The catalog if the fetch has finished, without blocking.
    pub fn poll(&mut self) -> Option<&Catalog> {
        if let Some(receiver) = &self.receiver {
            let received = match receiver.try_recv() {
                Ok(catalog) => Some(catalog),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(lost()),
            };
            if received.is_some() {
                self.catalog = received;
                self.receiver = None;
            }
        }
        self.catalog.as_ref()
    }

    /// Block until the fetch has finished.
    pub fn wait(&mut self) -> &Catalog {
        if let Some(receiver) = self.receiver.take() {
            self.catalog = Some(receiver.recv().unwrap_or_else(|_| lost()));
        }
        self.catalog.get_or_insert_with(Catalog::default)
    }
}

fn load(provider: &impl CatalogProvider) -> Catalog {
    match provider.fetch() {
        Ok(families) => {
            info!("Loaded {} font families", families.len());
            Catalog::new(families)
        }
        Err(e) => {
            warn!("Font catalog unavailable, suggestions disabled: {e}");
            Catalog::default()
        }
    }
}

fn lost() -> Catalog {
    warn!("Font catalog fetch ended without a result, suggestions disabled");
    Catalog::default()
}
