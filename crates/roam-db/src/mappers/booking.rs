//! Booking row <-> entity mapper

use roam_core::{Booking, BookingStatus, DomainError, Id, ListingRef, UserRef};

use super::bad_enum;
use crate::models::BookingModel;

impl TryFrom<BookingModel> for Booking {
    type Error = DomainError;

    fn try_from(model: BookingModel) -> Result<Self, Self::Error> {
        let status =
            BookingStatus::parse(&model.status).ok_or_else(|| bad_enum("status", &model.status))?;

        Ok(Booking {
            id: Id::from_uuid(model.id),
            guest_id: Id::from_uuid(model.guest_id),
            host: UserRef {
                id: Id::from_uuid(model.host_id),
                fullname: model.host_fullname,
                nickname: model.host_nickname,
                profile_pic: model.host_profile_pic,
            },
            listing: ListingRef {
                id: Id::from_uuid(model.listing_id),
                title: model.listing_title,
                property_type: model.listing_property_type,
                city: model.listing_city,
                photo: model.listing_photo,
                base_price: model.listing_base_price,
            },
            check_in_date: model.check_in_date,
            check_out_date: model.check_out_date,
            status,
            total_price: model.total_price,
            created_at: model.created_at,
        })
    }
}
