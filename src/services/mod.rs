//! Business logic services

pub mod auth;
pub mod catalog;
pub mod rentals;

use crate::{
    config::{AuthConfig, RentalsConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub rentals: rentals::RentalService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        rentals_config: RentalsConfig,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            rentals: rentals::RentalService::new(repository, rentals_config),
        }
    }
}
