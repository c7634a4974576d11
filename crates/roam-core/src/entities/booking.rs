//! Booking entity - a stay reserved against a listing

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Id;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CancelledByGuest,
    CancelledByHost,
    Declined,
    Completed,
}

impl BookingStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CancelledByGuest => "cancelled-by-guest",
            Self::CancelledByHost => "cancelled-by-host",
            Self::Declined => "declined",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled-by-guest" => Some(Self::CancelledByGuest),
            "cancelled-by-host" => Some(Self::CancelledByHost),
            "declined" => Some(Self::Declined),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Compact listing reference carried on a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRef {
    pub id: Id,
    pub title: String,
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub base_price: f64,
}

/// Compact user reference (host, review author, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: Id,
    pub fullname: String,
    pub nickname: String,
    pub profile_pic: String,
}

/// Booking entity
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Id,
    pub guest_id: Id,
    pub host: UserRef,
    pub listing: ListingRef,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CancelledByGuest,
            BookingStatus::CancelledByHost,
            BookingStatus::Declined,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("cancelled"), None);
    }
}
