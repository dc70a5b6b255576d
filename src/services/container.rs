//! Service Container - Centralized service access.
//!
//! Handlers reach every use case through `Services`; each field is a trait
//! object so tests can swap in doubles.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    JwtSessions, OwnerRoster, OwnerService, PhotoUploader, ProfileDirectory, ProfileService,
    PropertyCatalog, PropertyService, SessionService, SettingsService, SiteSettingsManager,
    TestimonialBoard, TestimonialService, UploadService,
};
use crate::config::Config;
use crate::infra::{
    ObjectStorage, OwnerRepository, OwnerStore, ProfileRepository, ProfileStore,
    PropertyRepository, PropertyStore, SettingsRepository, SettingsStore, SupabaseStorage,
    TestimonialRepository, TestimonialStore,
};

/// Every application service
#[derive(Clone)]
pub struct Services {
    pub sessions: Arc<dyn SessionService>,
    pub profiles: Arc<dyn ProfileService>,
    pub properties: Arc<dyn PropertyService>,
    pub owners: Arc<dyn OwnerService>,
    pub settings: Arc<dyn SettingsService>,
    pub testimonials: Arc<dyn TestimonialService>,
    pub uploads: Arc<dyn UploadService>,
}

/// Backends the services are built on
pub struct Backends {
    pub sessions: Arc<dyn SessionService>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub properties: Arc<dyn PropertyRepository>,
    pub owners: Arc<dyn OwnerRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    pub storage: Arc<dyn ObjectStorage>,
}

impl Services {
    /// Wire the concrete services over the given backends
    pub fn new(backends: Backends) -> Self {
        Self {
            sessions: backends.sessions,
            profiles: Arc::new(ProfileDirectory::new(backends.profiles)),
            properties: Arc::new(PropertyCatalog::new(backends.properties.clone())),
            owners: Arc::new(OwnerRoster::new(backends.owners)),
            settings: Arc::new(SiteSettingsManager::new(backends.settings)),
            testimonials: Arc::new(TestimonialBoard::new(backends.testimonials)),
            uploads: Arc::new(PhotoUploader::new(backends.storage, backends.properties)),
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: Arc<DatabaseConnection>, config: &Config) -> Self {
        Self::new(Backends {
            sessions: Arc::new(JwtSessions::from_config(config)),
            profiles: Arc::new(ProfileStore::new(db.clone())),
            properties: Arc::new(PropertyStore::new(db.clone())),
            owners: Arc::new(OwnerStore::new(db.clone())),
            settings: Arc::new(SettingsStore::new(db.clone())),
            testimonials: Arc::new(TestimonialStore::new(db)),
            storage: Arc::new(SupabaseStorage::from_config(config)),
        })
    }
}
