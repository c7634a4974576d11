//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service, and the notification dispatcher.

use std::sync::Arc;

use roam_common::auth::JwtService;
use roam_core::traits::{
    BookingRepository, ReviewRepository, TripRepository, UserRepository, VehicleRepository,
};
use roam_notify::Notifier;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    trip_repo: Arc<dyn TripRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    vehicle_repo: Arc<dyn VehicleRepository>,
    jwt_service: Arc<JwtService>,
    notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the trip repository
    pub fn trip_repo(&self) -> &dyn TripRepository {
        self.trip_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the vehicle repository
    pub fn vehicle_repo(&self) -> &dyn VehicleRepository {
        self.vehicle_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the notification dispatcher
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating a ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    trip_repo: Option<Arc<dyn TripRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    vehicle_repo: Option<Arc<dyn VehicleRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn trip_repo(mut self, repo: Arc<dyn TripRepository>) -> Self {
        self.trip_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn vehicle_repo(mut self, repo: Arc<dyn VehicleRepository>) -> Self {
        self.vehicle_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            trip_repo: self
                .trip_repo
                .ok_or_else(|| ServiceError::validation("trip_repo is required"))?,
            booking_repo: self
                .booking_repo
                .ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            review_repo: self
                .review_repo
                .ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            vehicle_repo: self
                .vehicle_repo
                .ok_or_else(|| ServiceError::validation("vehicle_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            notifier: self
                .notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
        })
    }
}
