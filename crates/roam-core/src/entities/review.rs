//! Review entity - feedback left between users after a trip or stay

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::booking::UserRef;
use crate::value_objects::Id;

/// What the review is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    Trip,
    Listing,
    Driver,
    Passenger,
    Host,
    Guest,
}

impl ReviewType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::Listing => "listing",
            Self::Driver => "driver",
            Self::Passenger => "passenger",
            Self::Host => "host",
            Self::Guest => "guest",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trip" => Some(Self::Trip),
            "listing" => Some(Self::Listing),
            "driver" => Some(Self::Driver),
            "passenger" => Some(Self::Passenger),
            "host" => Some(Self::Host),
            "guest" => Some(Self::Guest),
            _ => None,
        }
    }
}

/// Review entity
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Id,
    pub author: UserRef,
    pub recipient_id: Id,
    /// 1 to 5 stars
    pub rating: i32,
    pub comment: String,
    pub review_type: ReviewType,
    /// Hidden reviews are excluded from public profiles
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}
