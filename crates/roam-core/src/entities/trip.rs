//! Trip entity - a published ride offer

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Id;

/// Trip lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    Draft,
    Published,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Statuses shown on a public profile
    #[must_use]
    pub fn is_profile_visible(&self) -> bool {
        matches!(self, Self::Published | Self::InProgress | Self::Completed)
    }
}

/// Compact vehicle reference attached to a trip listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRef {
    pub id: Id,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: String,
    pub seats: i32,
    pub comfort: String,
}

/// Trip entity
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Id,
    pub driver_id: Id,
    /// Joined vehicle summary, when the trip has one assigned
    pub vehicle: Option<VehicleRef>,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub price_per_seat: f64,
    pub available_seats: i32,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}
