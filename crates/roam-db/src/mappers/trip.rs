//! Trip row <-> entity mapper

use roam_core::{DomainError, Id, Trip, TripStatus, VehicleRef};

use super::bad_enum;
use crate::models::TripModel;

impl TryFrom<TripModel> for Trip {
    type Error = DomainError;

    fn try_from(model: TripModel) -> Result<Self, Self::Error> {
        let status =
            TripStatus::parse(&model.status).ok_or_else(|| bad_enum("status", &model.status))?;

        // All vehicle columns come from the same LEFT JOIN row, so either
        // every one is present or none is.
        let vehicle = match (
            model.vehicle_id,
            model.vehicle_brand,
            model.vehicle_model,
            model.vehicle_year,
            model.vehicle_category,
            model.vehicle_seats,
            model.vehicle_comfort,
        ) {
            (Some(id), Some(brand), Some(vmodel), Some(year), Some(category), Some(seats), Some(comfort)) => {
                Some(VehicleRef {
                    id: Id::from_uuid(id),
                    brand,
                    model: vmodel,
                    year,
                    category,
                    seats,
                    comfort,
                })
            }
            _ => None,
        };

        Ok(Trip {
            id: Id::from_uuid(model.id),
            driver_id: Id::from_uuid(model.driver_id),
            vehicle,
            origin: model.origin,
            destination: model.destination,
            departure_date: model.departure_date,
            departure_time: model.departure_time,
            price_per_seat: model.price_per_seat,
            available_seats: model.available_seats,
            status,
            created_at: model.created_at,
        })
    }
}
