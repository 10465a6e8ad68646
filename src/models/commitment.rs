use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::CommitmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commitment {
    pub id: String,
    pub patient_id: String,
    pub family_id: String,
    pub description: String,
    pub created: NaiveDateTime,
    pub status: CommitmentStatus,
}
