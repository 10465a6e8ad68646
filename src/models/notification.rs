use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{NotificationStatus, NotificationType};

/// A side-channel effect of booking (SMS sent, CRM updated, ...).
/// Append-only; created only by the booking action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub detail: String,
    pub created: NaiveDateTime,
    pub status: NotificationStatus,
}
