use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// The health-fund branch a patient is registered with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedDoctor {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub age: u32,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub phone: String,
    pub branch: Branch,
    pub assigned_doctor: AssignedDoctor,
    pub family_id: String,
}
