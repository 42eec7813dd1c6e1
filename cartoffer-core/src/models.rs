use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

pub type RestaurantId = u64;
pub type UserId = u64;

/// Discount kind of an offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OfferType {
    /// Subtract a fixed amount, floored at zero
    #[serde(rename = "FLATX")]
    FlatAmount,
    /// Scale the cart down by a number of percentage points
    #[serde(rename = "FLATX%")]
    FlatPercent,
}

impl OfferType {
    pub fn label(&self) -> &'static str {
        match self {
            OfferType::FlatAmount => "FLATX",
            OfferType::FlatPercent => "FLATX%",
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OfferType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FLATX" => Ok(OfferType::FlatAmount),
            "FLATX%" => Ok(OfferType::FlatPercent),
            other => Err(CoreError::InvalidOfferType(other.to_string())),
        }
    }
}

/// Recognized user segments. Any other label is inert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    P1,
    P2,
    P3,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::P1, Segment::P2, Segment::P3];

    /// Map a raw label onto the recognized universe (exact, case-sensitive)
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "p1" => Some(Segment::P1),
            "p2" => Some(Segment::P2),
            "p3" => Some(Segment::P3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::P1 => "p1",
            Segment::P2 => "p2",
            Segment::P3 => "p3",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A promotion registered for one restaurant. Never mutated once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
    pub offer_type: OfferType,
    pub discount_value: u64,
    /// Raw labels as registered, unrecognized ones included
    pub segments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(
        restaurant_id: RestaurantId,
        offer_type: OfferType,
        discount_value: u64,
        segments: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            restaurant_id,
            offer_type,
            discount_value,
            segments,
            created_at: Utc::now(),
        }
    }

    /// True if one of the offer's recognized labels is `segment`
    pub fn targets(&self, segment: Segment) -> bool {
        self.segments
            .iter()
            .any(|label| Segment::parse(label) == Some(segment))
    }

    /// False when every label is outside the recognized universe
    pub fn is_matchable(&self) -> bool {
        self.segments.iter().any(|label| Segment::parse(label).is_some())
    }
}
