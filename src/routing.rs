//! Referral worklist routing — decides which scheduling system handles a
//! referral the agent clicks: the quick-flow ultrasound path or one of the
//! legacy (Bossa Nova) screens.

use serde::{Deserialize, Serialize};

use crate::models::{ReferralStatus, SchedulingSystem};

/// A row in the agent-facing referral worklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralServiceRow {
    pub id: u32,
    pub service_code: String,
    pub service_name: String,
    pub scheduling_system: SchedulingSystem,
    pub status: ReferralStatus,
}

/// Where a referral row books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingRoute {
    /// Quick-flow ultrasound booking, search pre-filled with the service name.
    QuickFlow { prefill: String },
    /// Legacy consultant search, scoped to a specialty.
    Consultant { specialty: String },
    /// Legacy institute search, seeded with a free-text query.
    Institute { query: String },
}

/// The demo worklist shown on the referrals screen.
pub fn referral_worklist() -> Vec<ReferralServiceRow> {
    fn row(id: u32, code: &str, name: &str, system: SchedulingSystem) -> ReferralServiceRow {
        ReferralServiceRow {
            id,
            service_code: code.into(),
            service_name: name.into(),
            scheduling_system: system,
            status: ReferralStatus::Open,
        }
    }

    vec![
        row(1, "141", "קרדיולוגיה", SchedulingSystem::BossaNova),
        row(2, "131", "גינקולוגיה", SchedulingSystem::BossaNova),
        row(3, "221", "אולטרסאונד כללי", SchedulingSystem::QFlow),
        row(4, "222", "אולטרסאונד גינקולוגי", SchedulingSystem::BossaNova),
        row(5, "213", "בדיקות דם", SchedulingSystem::BossaNova),
    ]
}

/// Routes a worklist row to its booking flow.
///
/// Quick-flow rows carry the service name into the slot search. Legacy
/// rows land on the consultant screen when the service is one of the
/// specialty referrals, and fall back to the institute search otherwise.
pub fn booking_route(row: &ReferralServiceRow) -> BookingRoute {
    if row.scheduling_system == SchedulingSystem::QFlow {
        return BookingRoute::QuickFlow {
            prefill: row.service_name.clone(),
        };
    }

    match row.service_name.as_str() {
        "קרדיולוגיה" | "גינקולוגיה" => BookingRoute::Consultant {
            specialty: row.service_name.clone(),
        },
        _ => BookingRoute::Institute {
            query: row.service_name.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_flow_rows_prefill_slot_search() {
        let rows = referral_worklist();
        let qf = rows.iter().find(|r| r.scheduling_system == SchedulingSystem::QFlow).unwrap();

        assert_eq!(
            booking_route(qf),
            BookingRoute::QuickFlow {
                prefill: "אולטרסאונד כללי".into()
            }
        );
    }

    #[test]
    fn specialty_referrals_route_to_consultant_search() {
        let rows = referral_worklist();

        assert_eq!(
            booking_route(&rows[0]),
            BookingRoute::Consultant {
                specialty: "קרדיולוגיה".into()
            }
        );
        assert_eq!(
            booking_route(&rows[1]),
            BookingRoute::Consultant {
                specialty: "גינקולוגיה".into()
            }
        );
    }

    #[test]
    fn other_legacy_rows_route_to_institute_search() {
        let rows = referral_worklist();

        // Legacy ultrasound variants stay off the quick-flow path.
        assert_eq!(
            booking_route(&rows[3]),
            BookingRoute::Institute {
                query: "אולטרסאונד גינקולוגי".into()
            }
        );
        assert_eq!(
            booking_route(&rows[4]),
            BookingRoute::Institute {
                query: "בדיקות דם".into()
            }
        );
    }

    #[test]
    fn worklist_rows_are_all_open() {
        assert!(referral_worklist().iter().all(|r| r.status == ReferralStatus::Open));
    }
}
