//! Tariff Store
//!
//! Holds the current resolved tariff behind a `RwLock<Arc<_>>`. Readers take a
//! snapshot and price outside the lock. A replace validates first and writes
//! the settings file under a separate writer mutex; the snapshot lock is only
//! held to swap the pointer.

use parking_lot::{Mutex, RwLock};
use shared::error::AppError;
use shared::models::{TariffSettings, TariffSnapshot};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::pricing::TariffConfig;

/// A resolved tariff together with the settings it came from
#[derive(Debug)]
pub struct StoredTariff {
    pub settings: TariffSettings,
    pub config: TariffConfig,
    pub version: u64,
    pub updated_at: i64,
}

impl StoredTariff {
    pub fn snapshot(&self) -> TariffSnapshot {
        TariffSnapshot {
            settings: self.settings.clone(),
            version: self.version,
            updated_at: self.updated_at,
        }
    }
}

/// Settings store for the delivery/discount/tax tariff
#[derive(Debug)]
pub struct TariffStore {
    path: PathBuf,
    current: RwLock<Option<Arc<StoredTariff>>>,
    /// Serializes replaces so file contents and version agree
    writer: Mutex<()>,
}

impl TariffStore {
    /// Create an empty store persisting to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(None),
            writer: Mutex::new(()),
        }
    }

    /// Load settings from `path`
    ///
    /// A missing file leaves the store unconfigured. A file that exists but
    /// cannot be parsed or resolved is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = Self::new(path);

        if !store.path.exists() {
            tracing::warn!(
                path = %store.path.display(),
                "Tariff settings file not found, quotes disabled until configured"
            );
            return Ok(store);
        }

        let content = std::fs::read_to_string(&store.path).map_err(|e| {
            AppError::storage(format!(
                "Failed to read tariff settings {}: {}",
                store.path.display(),
                e
            ))
        })?;
        let settings: TariffSettings = serde_json::from_str(&content).map_err(|e| {
            AppError::config(format!(
                "Failed to parse tariff settings {}: {}",
                store.path.display(),
                e
            ))
        })?;
        let config = TariffConfig::resolve(&settings)?;

        *store.current.write() = Some(Arc::new(StoredTariff {
            settings,
            config,
            version: 0,
            updated_at: chrono::Utc::now().timestamp_millis(),
        }));
        tracing::info!(path = %store.path.display(), "Tariff settings loaded");

        Ok(store)
    }

    /// Settings file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current tariff, if configured
    pub fn current(&self) -> Option<Arc<StoredTariff>> {
        self.current.read().clone()
    }

    pub fn is_configured(&self) -> bool {
        self.current.read().is_some()
    }

    /// Validate, persist and activate new settings
    pub fn replace(&self, settings: TariffSettings) -> Result<TariffSnapshot, AppError> {
        let config = TariffConfig::resolve(&settings)?;

        let _writer = self.writer.lock();
        self.persist(&settings)?;

        let snapshot = {
            let mut current = self.current.write();
            let version = current.as_ref().map(|t| t.version + 1).unwrap_or(1);
            let stored = Arc::new(StoredTariff {
                settings,
                config,
                version,
                updated_at: chrono::Utc::now().timestamp_millis(),
            });
            let snapshot = stored.snapshot();
            *current = Some(stored);
            snapshot
        };

        tracing::info!(version = snapshot.version, "Tariff settings replaced");
        Ok(snapshot)
    }

    /// Write to a sibling temp file, then rename over the target
    fn persist(&self, settings: &TariffSettings) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::internal(format!("Failed to serialize tariff: {}", e)))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!(
                    "Failed to create settings directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::storage(format!(
                "Failed to move {} to {}: {}",
                tmp.display(),
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }
}
