use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::clinic::Clinic;

/// A bookable (service, time, clinic, provider) offering.
///
/// Slots are never removed from the underlying pool; a booked slot is
/// hidden from search once its id lands in the store's booked-slot set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub id: String,
    pub service_name: String,
    pub treatment_code: String,
    pub start: NaiveDateTime,
    pub clinic: Clinic,
    pub provider_name: String,
    pub distance_km: Option<f64>,
}
