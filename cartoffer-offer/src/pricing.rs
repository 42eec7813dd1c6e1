use cartoffer_core::OfferType;

/// Discounted cart value. Integer arithmetic only; never below zero.
///
/// Percent discounts truncate, and a percentage above 100 yields 0.
pub fn apply_discount(offer_type: OfferType, cart_value: u64, discount_value: u64) -> u64 {
    match offer_type {
        OfferType::FlatAmount => cart_value.saturating_sub(discount_value),
        OfferType::FlatPercent => {
            let kept = 100u64.saturating_sub(discount_value);
            // u128 so large carts cannot overflow; result <= cart_value
            ((cart_value as u128 * kept as u128) / 100) as u64
        }
    }
}
