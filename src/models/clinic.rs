use serde::{Deserialize, Serialize};

/// A clinic site where appointments and slots take place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub city: String,
}
