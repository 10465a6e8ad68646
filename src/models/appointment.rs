use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::clinic::Clinic;
use super::enums::{AppointmentStatus, ServiceCategory};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    /// Denormalized from the owning patient for family-wide queries.
    pub family_id: String,
    pub service_category: ServiceCategory,
    pub service_name: String,
    pub clinic: Clinic,
    pub provider_name: String,
    pub start: NaiveDateTime,
    pub status: AppointmentStatus,
}
