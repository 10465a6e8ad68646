pub mod appointment;
pub mod clinic;
pub mod commitment;
pub mod enums;
pub mod notification;
pub mod patient;
pub mod referral;
pub mod slot;

pub use appointment::Appointment;
pub use clinic::Clinic;
pub use commitment::Commitment;
pub use enums::*;
pub use notification::NotificationEvent;
pub use patient::{AssignedDoctor, Branch, Patient};
pub use referral::Referral;
pub use slot::AvailableSlot;
