use crate::error::PlatformError;
use crate::features::{Shipments, Vehicles, Warehouses};
use freight_database::Database;
use freight_kernel::domain::config::AppConfig;
use freight_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use freight_logger::Journal;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::ops::Deref;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct PlatformInner {
    pub config: AppConfig,
    pub database: Database,
    pub journal: Journal,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Wired application: config, store handle, journal and every initialized slice.
///
/// Cheap to clone; clones share the same slices.
#[derive(Debug, Clone)]
pub struct Platform {
    inner: Arc<PlatformInner>,
}

impl Platform {
    #[must_use]
    pub fn builder() -> PlatformBuilder {
        PlatformBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, PlatformError> {
        self.get_slice::<T>().ok_or_else(|| PlatformError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// # Errors
    /// `MissingSlice` if the shipments slice was not registered.
    pub fn shipments(&self) -> Result<&Shipments, PlatformError> {
        self.try_get_slice::<Shipments>()
    }

    /// # Errors
    /// `MissingSlice` if the vehicles slice was not registered.
    pub fn vehicles(&self) -> Result<&Vehicles, PlatformError> {
        self.try_get_slice::<Vehicles>()
    }

    /// # Errors
    /// `MissingSlice` if the warehouses slice was not registered.
    pub fn warehouses(&self) -> Result<&Warehouses, PlatformError> {
        self.try_get_slice::<Warehouses>()
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for Platform {
    type Target = PlatformInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct PlatformBuilder {
    config: Option<AppConfig>,
    database: Option<Database>,
    journal: Option<Journal>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl PlatformBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Journal shared with the logger. A fresh one is created when none is given.
    pub fn journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Registers an extra slice next to the built-in ones.
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Initializes every built-in slice and freezes the registry.
    ///
    /// # Errors
    /// * `Validation` when the config or the database was not provided.
    /// * The wrapped slice error when a slice rejects the config.
    pub fn build(self) -> Result<Platform, PlatformError> {
        let config = self.config.ok_or_else(|| PlatformError::Validation {
            message: "AppConfig not provided".into(),
            context: None,
        })?;
        let database = self.database.ok_or_else(|| PlatformError::Validation {
            message: "Database not provided".into(),
            context: None,
        })?;
        let journal = self.journal.unwrap_or_default();

        let mut slices = self.slices;
        for slice in crate::init(&config, &database)? {
            slices.insert(slice.id, slice);
        }

        info!(slices = slices.len(), url = database.url(), "Platform initialized");
        journal.info(format!("Platform initialized with {} slices", slices.len()));

        Ok(Platform { inner: Arc::new(PlatformInner { config, database, journal, slices }) })
    }
}
