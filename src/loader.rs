//! Background load of the rate file at startup.
//!
//! The store is built inside the spawned task and only handed out once the
//! task has been joined, so nothing can observe a partially loaded store.

use std::future::Future;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::error::{LoadError, RateError, Result};
use crate::rate_file;
use crate::rate_store::RateStore;

/// How the background load finished.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(RateStore),
    /// The rate file does not exist; the shell starts with no rates.
    Missing(PathBuf),
}

impl LoadOutcome {
    pub fn into_store(self) -> RateStore {
        match self {
            LoadOutcome::Loaded(store) => store,
            LoadOutcome::Missing(_) => RateStore::new(),
        }
    }
}

pub struct RateLoader {
    path: PathBuf,
    handle: JoinHandle<Result<RateStore>>,
}

impl RateLoader {
    /// Starts loading `path` on the blocking pool. Must be called from
    /// within a tokio runtime.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let task_path = path.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let mut store = RateStore::new();
            let loaded = rate_file::load(&task_path, &mut store)?;
            info!("Loaded {} rates from {}", loaded, task_path.display());
            Ok(store)
        });

        Self { path, handle }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Waits for the load to finish. A missing file is not an error.
    pub async fn wait(self) -> std::result::Result<LoadOutcome, LoadError> {
        debug!("Waiting for rates from {}", self.path.display());
        match self.handle.await? {
            Ok(store) => Ok(LoadOutcome::Loaded(store)),
            Err(RateError::FileNotFound(path)) => {
                warn!("Rate file {} not found, starting with no rates", path.display());
                Ok(LoadOutcome::Missing(path))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`RateLoader::wait`], but gives up with `LoadError::Interrupted`
    /// as soon as `interrupt` resolves. An interrupt that is already ready
    /// wins over a finished load.
    pub async fn wait_or_interrupt<F>(
        self,
        interrupt: F,
    ) -> std::result::Result<LoadOutcome, LoadError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = interrupt => {
                warn!("Rate loading interrupted");
                Err(LoadError::Interrupted)
            }
            outcome = self.wait() => outcome,
        }
    }
}
