use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::ReferralStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referral {
    pub id: String,
    pub patient_id: String,
    pub family_id: String,
    pub referral_type: String,
    pub exam_code: String,
    pub exam_name: String,
    pub referring_doctor: String,
    pub referral_number: String,
    pub created: NaiveDateTime,
    pub expires: NaiveDateTime,
    pub status: ReferralStatus,
}
