//! Vehicle row <-> entity mapper

use roam_core::{Id, Vehicle};

use crate::models::VehicleModel;

impl From<VehicleModel> for Vehicle {
    fn from(model: VehicleModel) -> Self {
        Vehicle {
            id: Id::from_uuid(model.id),
            owner_id: Id::from_uuid(model.owner_id),
            brand: model.brand,
            model: model.model,
            year: model.year,
            color: model.color,
            category: model.category,
            seats: model.seats,
            comfort: model.comfort,
            features: model.features,
            photos: model.photos,
            is_verified: model.is_verified,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
