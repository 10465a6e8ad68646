//! Booking side-channel synthesis — agent summary, patient SMS, CRM update,
//! personal-area update.
//!
//! Template-based generation, kept pure: the booking action passes the
//! resolved patient, the chosen slot, the new appointment id, and a creation
//! timestamp, and gets back the four events to append. No store access, no
//! clock reads.

use chrono::NaiveDateTime;

use crate::config;
use crate::models::{
    AvailableSlot, NotificationEvent, NotificationStatus, NotificationType, Patient,
};

/// Slot timestamps rendered the way the portal shows them (19.8.2026).
fn slot_date(slot: &AvailableSlot) -> String {
    slot.start.format("%-d.%-m.%Y").to_string()
}

fn slot_time(slot: &AvailableSlot) -> String {
    slot.start.format("%H:%M").to_string()
}

/// Builds the four notification events recorded for every booking, in the
/// order the portal displays them: agent summary, SMS, CRM, personal area.
pub fn booking_notifications(
    patient: &Patient,
    slot: &AvailableSlot,
    appointment_id: &str,
    created: NaiveDateTime,
) -> Vec<NotificationEvent> {
    let stamp = created.and_utc().timestamp_millis();
    let date = slot_date(slot);
    let time = slot_time(slot);

    let event = |seq: u32, notification_type, title: &str, detail: String| NotificationEvent {
        id: format!("NTF-{stamp}-{seq}"),
        notification_type,
        title: title.into(),
        detail,
        created,
        status: NotificationStatus::Ok,
    };

    vec![
        event(
            1,
            NotificationType::AgentSummary,
            "סיכום נציג",
            format!(
                "נקבע תור {} עבור {} {} בתאריך {} בשעה {} ב{}",
                slot.service_name, patient.first_name, patient.last_name, date, time, slot.clinic.name
            ),
        ),
        event(
            2,
            NotificationType::Sms,
            "SMS נשלח למטופל",
            format!(
                "שלום {}, תור {} נקבע לך בתאריך {} בשעה {}. מיקום: {}, {}. לביטול חייגו {}.",
                patient.first_name,
                slot.service_name,
                date,
                time,
                slot.clinic.name,
                slot.clinic.city,
                config::CANCEL_HOTLINE
            ),
        ),
        event(
            3,
            NotificationType::Crm,
            "CRM עודכן",
            format!("רשומת תור חדשה נוספה למערכת CRM - {appointment_id}"),
        ),
        event(
            4,
            NotificationType::PersonalArea,
            "אזור אישי עודכן",
            "התור מופיע כעת באזור האישי של המטופל באפליקציה ובאתר".into(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample() -> (Patient, AvailableSlot) {
        let patient = seed::patients().remove(0);
        let slot = seed::available_slots(fixed_now()).remove(0);
        (patient, slot)
    }

    #[test]
    fn exactly_four_events_one_of_each_type() {
        let (patient, slot) = sample();
        let events = booking_notifications(&patient, &slot, "APT-1", fixed_now());

        assert_eq!(events.len(), 4);
        let types: Vec<NotificationType> =
            events.iter().map(|e| e.notification_type.clone()).collect();
        assert_eq!(
            types,
            vec![
                NotificationType::AgentSummary,
                NotificationType::Sms,
                NotificationType::Crm,
                NotificationType::PersonalArea,
            ]
        );
        assert!(events.iter().all(|e| e.status == NotificationStatus::Ok));
    }

    #[test]
    fn event_ids_share_stamp_with_running_suffix() {
        let (patient, slot) = sample();
        let created = fixed_now();
        let stamp = created.and_utc().timestamp_millis();
        let events = booking_notifications(&patient, &slot, "APT-1", created);

        for (i, e) in events.iter().enumerate() {
            assert_eq!(e.id, format!("NTF-{}-{}", stamp, i + 1));
            assert_eq!(e.created, created);
        }
    }

    #[test]
    fn agent_summary_embeds_patient_service_and_clinic() {
        let (patient, slot) = sample();
        let events = booking_notifications(&patient, &slot, "APT-1", fixed_now());

        let summary = &events[0];
        assert!(summary.detail.contains(&patient.first_name));
        assert!(summary.detail.contains(&patient.last_name));
        assert!(summary.detail.contains(&slot.service_name));
        assert!(summary.detail.contains(&slot.clinic.name));
        // SL-001 starts two days after the fixed now, at 09:00.
        assert!(summary.detail.contains("בתאריך 7.8.2026"));
        assert!(summary.detail.contains("בשעה 09:00"));
    }

    #[test]
    fn sms_quotes_location_and_cancel_hotline() {
        let (patient, slot) = sample();
        let events = booking_notifications(&patient, &slot, "APT-1", fixed_now());

        let sms = &events[1];
        assert!(sms.detail.starts_with(&format!("שלום {}", patient.first_name)));
        assert!(sms.detail.contains(&slot.clinic.city));
        assert!(sms.detail.contains("*2700"));
    }

    #[test]
    fn crm_update_references_the_new_appointment() {
        let (patient, slot) = sample();
        let events = booking_notifications(&patient, &slot, "APT-1754000000000", fixed_now());
        assert!(events[2].detail.contains("APT-1754000000000"));
    }
}
