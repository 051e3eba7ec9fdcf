//! Tests for the registration/address splitter

use crate::app::models::AddressStartPoint;


/// Shorthand for a valid start point
pub fn start_point(value: u8) -> AddressStartPoint {
    AddressStartPoint::new(value).unwrap()
}
