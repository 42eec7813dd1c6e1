use std::sync::Arc;

use cartoffer_core::{Offer, Segment};

/// Narrow a resolved label to the recognized segment universe
pub fn recognized_segment(label: Option<&str>) -> Option<Segment> {
    label.and_then(Segment::parse)
}

/// First offer, in insertion order, targeting `segment`.
///
/// Later offers are never considered once one matches, whatever their size.
pub fn select_offer(offers: &[Arc<Offer>], segment: Segment) -> Option<&Arc<Offer>> {
    offers.iter().find(|offer| offer.targets(segment))
}
